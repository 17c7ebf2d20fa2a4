/// Startup and serve-loop failures. Every variant is fatal to the process.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("failed to listen on {addr}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("failed to read the bound address")]
    LocalAddr(#[source] std::io::Error),
    #[error("failed to serve")]
    Serve(#[from] tonic::transport::Error),
}
