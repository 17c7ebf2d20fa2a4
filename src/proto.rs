//! Code generated from `proto/auth/v1/user.proto` by `tonic-build`.

pub mod auth {
    pub mod v1 {
        tonic::include_proto!("auth.v1");
    }
}

pub use self::auth::v1::{
    user_service_client::UserServiceClient,
    user_service_server::{UserService, UserServiceServer},
    GetUserRequest, GetUserResponse,
};
