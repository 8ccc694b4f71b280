use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown username or wrong password during login. The response is
    /// identical for both cases so usernames cannot be probed.
    #[error("Login rejected: unknown username or wrong password")]
    InvalidCredentials,

    /// No admin id stored in the current session.
    #[error("No admin session present")]
    NotAuthenticated,

    /// The session references an admin that no longer exists.
    #[error("Admin {0} from session not found in database")]
    AdminNotInDatabase(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "You must be logged in to perform this action",
            ),
            Self::AdminNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "Session not found"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
