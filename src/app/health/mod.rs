use tonic_health::pb::health_server::{Health, HealthServer};

use super::UserHandler;
use crate::proto::UserServiceServer;

/// `grpc.health.v1.Health`, reporting `auth.v1.UserService` as serving.
pub async fn service() -> HealthServer<impl Health> {
    let (mut reporter, service) = tonic_health::server::health_reporter();
    reporter
        .set_serving::<UserServiceServer<UserHandler>>()
        .await;

    service
}
