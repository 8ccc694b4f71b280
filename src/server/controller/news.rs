use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::News;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::news::{CreateNewsDto, UpdateNewsDto},
        service::content::ContentService,
        state::AppState,
    },
};

pub static NEWS_TAG: &str = "news";

#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses((status = 200, description = "All news items, newest first", body = Vec<entity::news::Model>)),
)]
pub async fn list_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = ContentService::<News>::new(&state.db).list().await?;
    Ok(Json(DataDto::new(items)))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News item", body = entity::news::Model),
        (status = 404, description = "News item not found", body = ErrorDto)
    ),
)]
pub async fn get_news_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = ContentService::<News>::new(&state.db).get_by_id(id).await?;
    Ok(Json(DataDto::new(item)))
}

#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "News item created", body = entity::news::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_news_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let item = ContentService::<News>::new(&state.db).create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("News item created successfully", item)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "News item updated", body = entity::news::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "News item not found", body = ErrorDto)
    ),
)]
pub async fn update_news_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let item = ContentService::<News>::new(&state.db).update(id, payload).await?;
    Ok(Json(MessageDataDto::new("News item updated successfully", item)))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News item deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "News item not found", body = ErrorDto)
    ),
)]
pub async fn delete_news_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<News>::new(&state.db).delete(id).await?;
    Ok(Json(MessageDto::new("News item deleted successfully")))
}
