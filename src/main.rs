use anyhow::Context;
use grpc_auth::{app::App, config::get_configuration, telemetry::get_subscriber};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let app = App::build(&config.application)
        .await
        .context("Failed to listen")?;

    tracing::info!(addr = %app.local_addr(), "gRPC server listening");
    app.serve().await.context("Failed to serve")?;

    Ok(())
}
