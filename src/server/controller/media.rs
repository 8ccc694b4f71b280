use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::MediaItem;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::media::{CreateMediaItemDto, UpdateMediaItemDto},
        service::content::ContentService,
        state::AppState,
    },
};

pub static MEDIA_TAG: &str = "media";

#[utoipa::path(
    get,
    path = "/api/media",
    tag = MEDIA_TAG,
    responses((status = 200, description = "All media items", body = Vec<entity::media_item::Model>)),
)]
pub async fn list_media(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = ContentService::<MediaItem>::new(&state.db).list().await?;
    Ok(Json(DataDto::new(items)))
}

#[utoipa::path(
    get,
    path = "/api/media/{id}",
    tag = MEDIA_TAG,
    params(("id" = i32, Path, description = "Media item id")),
    responses(
        (status = 200, description = "Media item", body = entity::media_item::Model),
        (status = 404, description = "Media item not found", body = ErrorDto)
    ),
)]
pub async fn get_media_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = ContentService::<MediaItem>::new(&state.db).get_by_id(id).await?;
    Ok(Json(DataDto::new(item)))
}

#[utoipa::path(
    post,
    path = "/api/media",
    tag = MEDIA_TAG,
    request_body = CreateMediaItemDto,
    responses(
        (status = 201, description = "Media item created", body = entity::media_item::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_media_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMediaItemDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let item = ContentService::<MediaItem>::new(&state.db).create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("Media item created successfully", item)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/media/{id}",
    tag = MEDIA_TAG,
    params(("id" = i32, Path, description = "Media item id")),
    request_body = UpdateMediaItemDto,
    responses(
        (status = 200, description = "Media item updated", body = entity::media_item::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Media item not found", body = ErrorDto)
    ),
)]
pub async fn update_media_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMediaItemDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let item = ContentService::<MediaItem>::new(&state.db).update(id, payload).await?;
    Ok(Json(MessageDataDto::new("Media item updated successfully", item)))
}

#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    tag = MEDIA_TAG,
    params(("id" = i32, Path, description = "Media item id")),
    responses(
        (status = 200, description = "Media item deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Media item not found", body = ErrorDto)
    ),
)]
pub async fn delete_media_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<MediaItem>::new(&state.db).delete(id).await?;
    Ok(Json(MessageDto::new("Media item deleted successfully")))
}
