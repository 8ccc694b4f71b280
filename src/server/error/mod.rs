//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every handler. Domain
//! errors convert into it with `#[from]` and it implements `IntoResponse`,
//! so handlers propagate failures with `?` and get consistent
//! `{ok: false, error}` JSON bodies. Unexpected errors are logged with full
//! detail server-side while the client only ever sees a generic message.

pub mod auth;
pub mod config;
pub mod mail;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, mail::MailError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error; maps to its own status codes (401 mostly).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Outbound mail delivery error.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request payload failed validation. Results in 400 Bad Request with
    /// the collected field messages.
    #[error("{0}")]
    Validation(String),

    /// Resource not found. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation. Results in 400 Bad Request, matching the
    /// behavior clients of this API already rely on.
    #[error("{0}")]
    Conflict(String),

    /// Malformed request. Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with a message that is logged but never sent to the
    /// client.
    #[error("{0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let detail = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{field}: {detail}")
            })
            .collect();
        parts.sort();

        AppError::Validation(format!("Invalid data - {}", parts.join("; ")))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Validation(msg) | Self::Conflict(msg) | Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::MailErr(err) => {
                tracing::error!("Mail delivery error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(
                        "Failed to send the message. Please try again later.",
                    )),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response with a
/// generic body, logging the real message server-side.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
