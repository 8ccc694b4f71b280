use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Innovation;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::innovation::{CreateInnovationDto, UpdateInnovationDto},
        service::content::ContentService,
        state::AppState,
    },
};

pub static INNOVATION_TAG: &str = "innovations";

#[utoipa::path(
    get,
    path = "/api/innovations",
    tag = INNOVATION_TAG,
    responses((status = 200, description = "All innovations", body = Vec<entity::innovation::Model>)),
)]
pub async fn list_innovations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let innovations = ContentService::<Innovation>::new(&state.db).list().await?;
    Ok(Json(DataDto::new(innovations)))
}

#[utoipa::path(
    get,
    path = "/api/innovations/{id}",
    tag = INNOVATION_TAG,
    params(("id" = i32, Path, description = "Innovation id")),
    responses(
        (status = 200, description = "Innovation", body = entity::innovation::Model),
        (status = 404, description = "Innovation not found", body = ErrorDto)
    ),
)]
pub async fn get_innovation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let innovation = ContentService::<Innovation>::new(&state.db).get_by_id(id).await?;
    Ok(Json(DataDto::new(innovation)))
}

#[utoipa::path(
    post,
    path = "/api/innovations",
    tag = INNOVATION_TAG,
    request_body = CreateInnovationDto,
    responses(
        (status = 201, description = "Innovation created", body = entity::innovation::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_innovation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateInnovationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let innovation = ContentService::<Innovation>::new(&state.db).create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("Innovation created successfully", innovation)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/innovations/{id}",
    tag = INNOVATION_TAG,
    params(("id" = i32, Path, description = "Innovation id")),
    request_body = UpdateInnovationDto,
    responses(
        (status = 200, description = "Innovation updated", body = entity::innovation::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Innovation not found", body = ErrorDto)
    ),
)]
pub async fn update_innovation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInnovationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let innovation = ContentService::<Innovation>::new(&state.db).update(id, payload).await?;
    Ok(Json(MessageDataDto::new(
        "Innovation updated successfully",
        innovation,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/innovations/{id}",
    tag = INNOVATION_TAG,
    params(("id" = i32, Path, description = "Innovation id")),
    responses(
        (status = 200, description = "Innovation deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Innovation not found", body = ErrorDto)
    ),
)]
pub async fn delete_innovation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<Innovation>::new(&state.db).delete(id).await?;
    Ok(Json(MessageDto::new("Innovation deleted successfully")))
}
