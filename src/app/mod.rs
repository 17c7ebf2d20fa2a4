use std::net::SocketAddr;

use http::Request;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tower_http::trace::TraceLayer;

use crate::{config::ApplicationSettings, proto::UserServiceServer};

pub use self::error::ServerError;
pub use self::user::UserHandler;

mod error;
mod health;
pub mod user;

pub struct App {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl App {
    /// Binds the listener. There is no retry: a taken address is reported
    /// straight back to the caller.
    pub async fn build(settings: &ApplicationSettings) -> Result<Self, ServerError> {
        let addr = settings.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

        Ok(Self {
            listener,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    pub async fn serve(self) -> Result<(), ServerError> {
        let health_service = health::service().await;

        Server::builder()
            .layer(
                TraceLayer::new_for_grpc().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            )
            .add_service(health_service)
            .add_service(UserServiceServer::new(UserHandler))
            .serve_with_incoming(TcpListenerStream::new(self.listener))
            .await?;

        Ok(())
    }
}
