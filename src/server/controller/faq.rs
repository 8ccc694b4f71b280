use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Faq;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::faq::{CreateFaqDto, UpdateFaqDto},
        service::content::ContentService,
        state::AppState,
    },
};

pub static FAQ_TAG: &str = "faq";

#[utoipa::path(
    get,
    path = "/api/faq",
    tag = FAQ_TAG,
    responses((status = 200, description = "All FAQ entries", body = Vec<entity::faq::Model>)),
)]
pub async fn list_faq(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = ContentService::<Faq>::new(&state.db).list().await?;
    Ok(Json(DataDto::new(entries)))
}

#[utoipa::path(
    get,
    path = "/api/faq/{id}",
    tag = FAQ_TAG,
    params(("id" = i32, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "FAQ entry", body = entity::faq::Model),
        (status = 404, description = "FAQ entry not found", body = ErrorDto)
    ),
)]
pub async fn get_faq_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let entry = ContentService::<Faq>::new(&state.db).get_by_id(id).await?;
    Ok(Json(DataDto::new(entry)))
}

#[utoipa::path(
    post,
    path = "/api/faq",
    tag = FAQ_TAG,
    request_body = CreateFaqDto,
    responses(
        (status = 201, description = "FAQ entry created", body = entity::faq::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_faq_entry(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let entry = ContentService::<Faq>::new(&state.db).create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("FAQ entry created successfully", entry)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/faq/{id}",
    tag = FAQ_TAG,
    params(("id" = i32, Path, description = "FAQ id")),
    request_body = UpdateFaqDto,
    responses(
        (status = 200, description = "FAQ entry updated", body = entity::faq::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "FAQ entry not found", body = ErrorDto)
    ),
)]
pub async fn update_faq_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let entry = ContentService::<Faq>::new(&state.db).update(id, payload).await?;
    Ok(Json(MessageDataDto::new("FAQ entry updated successfully", entry)))
}

#[utoipa::path(
    delete,
    path = "/api/faq/{id}",
    tag = FAQ_TAG,
    params(("id" = i32, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "FAQ entry deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "FAQ entry not found", body = ErrorDto)
    ),
)]
pub async fn delete_faq_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<Faq>::new(&state.db).delete(id).await?;
    Ok(Json(MessageDto::new("FAQ entry deleted successfully")))
}
