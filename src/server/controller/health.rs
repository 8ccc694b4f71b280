use axum::{
    response::{IntoResponse, Redirect},
    Json,
};

use crate::model::api::HealthDto;

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthDto)),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto {
        ok: true,
        message: "Clinic API is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// The root redirects visitors to the interactive API documentation.
pub async fn root_redirect() -> Redirect {
    Redirect::temporary("/api-docs")
}
