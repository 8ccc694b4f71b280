use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        error::AppError,
        model::form::{AppointmentFormDto, ContactFormDto},
        state::AppState,
    },
};

/// Tag for grouping form endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";
pub static APPOINTMENT_TAG: &str = "appointment";

/// Contact form submission.
///
/// Validates the payload and forwards it to the clinic inbox. Rate-limited
/// per caller IP at the router.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = ContactFormDto,
    responses(
        (status = 200, description = "Message forwarded", body = MessageDto),
        (status = 400, description = "Invalid form data", body = ErrorDto),
        (status = 429, description = "Too many requests", body = ErrorDto),
        (status = 500, description = "Mail delivery failed", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    state.mailer.send_contact(&payload).await?;

    Ok(Json(MessageDto::new(
        "Your message has been sent. We will get back to you shortly.",
    )))
}

/// Appointment request submission.
#[utoipa::path(
    post,
    path = "/api/appointment",
    tag = APPOINTMENT_TAG,
    request_body = AppointmentFormDto,
    responses(
        (status = 200, description = "Request forwarded", body = MessageDto),
        (status = 400, description = "Invalid form data", body = ErrorDto),
        (status = 429, description = "Too many requests", body = ErrorDto),
        (status = 500, description = "Mail delivery failed", body = ErrorDto)
    ),
)]
pub async fn submit_appointment(
    State(state): State<AppState>,
    Json(payload): Json<AppointmentFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    state.mailer.send_appointment(&payload).await?;

    Ok(Json(MessageDto::new(
        "Your appointment request has been received. We will contact you shortly.",
    )))
}
