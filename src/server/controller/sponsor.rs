use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Sponsor;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::sponsor::{CreateSponsorDto, UpdateSponsorDto},
        service::content::ContentService,
        state::AppState,
    },
};

pub static SPONSOR_TAG: &str = "sponsors";

#[utoipa::path(
    get,
    path = "/api/sponsors",
    tag = SPONSOR_TAG,
    responses((status = 200, description = "All sponsors", body = Vec<entity::sponsor::Model>)),
)]
pub async fn list_sponsors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sponsors = ContentService::<Sponsor>::new(&state.db).list().await?;
    Ok(Json(DataDto::new(sponsors)))
}

#[utoipa::path(
    get,
    path = "/api/sponsors/{id}",
    tag = SPONSOR_TAG,
    params(("id" = i32, Path, description = "Sponsor id")),
    responses(
        (status = 200, description = "Sponsor", body = entity::sponsor::Model),
        (status = 404, description = "Sponsor not found", body = ErrorDto)
    ),
)]
pub async fn get_sponsor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let sponsor = ContentService::<Sponsor>::new(&state.db).get_by_id(id).await?;
    Ok(Json(DataDto::new(sponsor)))
}

#[utoipa::path(
    post,
    path = "/api/sponsors",
    tag = SPONSOR_TAG,
    request_body = CreateSponsorDto,
    responses(
        (status = 201, description = "Sponsor created", body = entity::sponsor::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_sponsor(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSponsorDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let sponsor = ContentService::<Sponsor>::new(&state.db).create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("Sponsor created successfully", sponsor)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/sponsors/{id}",
    tag = SPONSOR_TAG,
    params(("id" = i32, Path, description = "Sponsor id")),
    request_body = UpdateSponsorDto,
    responses(
        (status = 200, description = "Sponsor updated", body = entity::sponsor::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Sponsor not found", body = ErrorDto)
    ),
)]
pub async fn update_sponsor(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSponsorDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let sponsor = ContentService::<Sponsor>::new(&state.db).update(id, payload).await?;
    Ok(Json(MessageDataDto::new("Sponsor updated successfully", sponsor)))
}

#[utoipa::path(
    delete,
    path = "/api/sponsors/{id}",
    tag = SPONSOR_TAG,
    params(("id" = i32, Path, description = "Sponsor id")),
    responses(
        (status = 200, description = "Sponsor deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Sponsor not found", body = ErrorDto)
    ),
)]
pub async fn delete_sponsor(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<Sponsor>::new(&state.db).delete(id).await?;
    Ok(Json(MessageDto::new("Sponsor deleted successfully")))
}
