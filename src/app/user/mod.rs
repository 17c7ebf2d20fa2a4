use tonic::{Request, Response, Status};

use crate::proto::{GetUserRequest, GetUserResponse, UserService};

pub const EMAIL: &str = "xreyc@example.com";
pub const FULL_NAME: &str = "Reyco Seguma";

/// Answers `GetUserDetails` with a fixed record. Holds no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserHandler;

/// The username is copied as is, empty or not.
pub fn user_details(username: String) -> GetUserResponse {
    GetUserResponse {
        username,
        email: EMAIL.to_owned(),
        full_name: FULL_NAME.to_owned(),
    }
}

#[tonic::async_trait]
impl UserService for UserHandler {
    #[tracing::instrument(
        name = "Get user details",
        skip(self, request),
        fields(username = tracing::field::Empty)
    )]
    async fn get_user_details(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let GetUserRequest { username } = request.into_inner();
        tracing::Span::current().record("username", username.as_str());

        Ok(Response::new(user_details(username)))
    }
}
