use std::{process::Stdio, time::Duration};

use grpc_auth::{
    app::{App, ServerError},
    config::ApplicationSettings,
};
use tokio::{net::TcpListener, process::Command};

use crate::helper::spawn_app;

#[tokio::test]
async fn a_second_instance_on_the_same_port_fails_to_bind() {
    let app = spawn_app().await;
    let settings = ApplicationSettings {
        host: "127.0.0.1".into(),
        port: app.port,
    };

    match App::build(&settings).await {
        Err(ServerError::Bind { addr, .. }) => assert_eq!(addr, settings.address()),
        Err(e) => panic!("Expected a bind error, got {:?}", e),
        Ok(_) => panic!("The port should already be taken"),
    }
}

#[tokio::test]
async fn the_binary_exits_non_zero_when_the_port_is_taken() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("The OS should allocate an available port");
    let port = listener
        .local_addr()
        .expect("The listener should have an address")
        .port();

    let mut child = Command::new(env!("CARGO_BIN_EXE_grpc-auth"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("APP_APPLICATION__HOST", "127.0.0.1")
        .env("APP_APPLICATION__PORT", port.to_string())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .expect("The server binary should start");

    let status = tokio::time::timeout(Duration::from_secs(10), child.wait())
        .await
        .expect("The process should exit promptly")
        .expect("The exit status should be available");

    assert!(
        !status.success(),
        "The process exited with {} on a taken port",
        status
    );

    drop(listener);
}
