use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Treatment;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::treatment::{CreateTreatmentDto, UpdateTreatmentDto},
        service::content::ContentService,
        state::AppState,
    },
};

/// Tag for grouping treatment endpoints in OpenAPI documentation
pub static TREATMENT_TAG: &str = "treatments";

/// List all treatments, newest first.
#[utoipa::path(
    get,
    path = "/api/treatments",
    tag = TREATMENT_TAG,
    responses(
        (status = 200, description = "All treatments", body = Vec<entity::treatment::Model>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_treatments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let treatments = ContentService::<Treatment>::new(&state.db).list().await?;

    Ok(Json(DataDto::new(treatments)))
}

/// Get a treatment by its slug.
///
/// Treatments are the one entity addressed by slug rather than id on the
/// public site.
#[utoipa::path(
    get,
    path = "/api/treatments/{slug}",
    tag = TREATMENT_TAG,
    params(("slug" = String, Path, description = "Treatment slug")),
    responses(
        (status = 200, description = "Treatment", body = entity::treatment::Model),
        (status = 404, description = "Treatment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_treatment_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let treatment = ContentService::<Treatment>::new(&state.db)
        .get_by_slug(&slug)
        .await?;

    Ok(Json(DataDto::new(treatment)))
}

/// Create a treatment. Admin only.
///
/// A duplicate slug is rejected without creating a second record.
#[utoipa::path(
    post,
    path = "/api/treatments",
    tag = TREATMENT_TAG,
    request_body = CreateTreatmentDto,
    responses(
        (status = 201, description = "Treatment created", body = entity::treatment::Model),
        (status = 400, description = "Invalid payload or slug already in use", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_treatment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTreatmentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let treatment = ContentService::<Treatment>::new(&state.db)
        .create(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("Treatment created successfully", treatment)),
    ))
}

/// Partially update a treatment by id. Admin only.
#[utoipa::path(
    put,
    path = "/api/treatments/{id}",
    tag = TREATMENT_TAG,
    params(("id" = i32, Path, description = "Treatment id")),
    request_body = UpdateTreatmentDto,
    responses(
        (status = 200, description = "Treatment updated", body = entity::treatment::Model),
        (status = 400, description = "Invalid payload or slug already in use", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Treatment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_treatment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTreatmentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let treatment = ContentService::<Treatment>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok(Json(MessageDataDto::new(
        "Treatment updated successfully",
        treatment,
    )))
}

/// Delete a treatment by id. Admin only.
#[utoipa::path(
    delete,
    path = "/api/treatments/{id}",
    tag = TREATMENT_TAG,
    params(("id" = i32, Path, description = "Treatment id")),
    responses(
        (status = 200, description = "Treatment deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Treatment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_treatment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<Treatment>::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Treatment deleted successfully")))
}
