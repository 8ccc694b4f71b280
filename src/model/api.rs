//! Wire envelopes shared by every endpoint.
//!
//! Success responses carry `ok: true` plus a `data` and/or `message` field;
//! error responses are always `{ok: false, error}`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    #[schema(example = false)]
    pub ok: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// `{ok: true, data}` for list and single-record reads.
#[derive(Debug, Serialize)]
pub struct DataDto<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// `{ok: true, message}` for mutations with nothing else to return.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageDto {
    #[schema(example = true)]
    pub ok: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }
}

/// `{ok: true, message, data}` for create and update responses.
#[derive(Debug, Serialize)]
pub struct MessageDataDto<T> {
    pub ok: bool,
    pub message: String,
    pub data: T,
}

impl<T> MessageDataDto<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            ok: true,
            message: message.into(),
            data,
        }
    }
}

/// Body of the `/health` endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthDto {
    pub ok: bool,
    pub message: String,
    pub timestamp: String,
}
