use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Education;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::education::{CreateEducationDto, UpdateEducationDto},
        service::content::ContentService,
        state::AppState,
    },
};

pub static EDUCATION_TAG: &str = "education";

#[utoipa::path(
    get,
    path = "/api/education",
    tag = EDUCATION_TAG,
    responses((status = 200, description = "All education items", body = Vec<entity::education::Model>)),
)]
pub async fn list_education(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = ContentService::<Education>::new(&state.db).list().await?;
    Ok(Json(DataDto::new(items)))
}

#[utoipa::path(
    get,
    path = "/api/education/{id}",
    tag = EDUCATION_TAG,
    params(("id" = i32, Path, description = "Education id")),
    responses(
        (status = 200, description = "Education item", body = entity::education::Model),
        (status = 404, description = "Education item not found", body = ErrorDto)
    ),
)]
pub async fn get_education_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = ContentService::<Education>::new(&state.db).get_by_id(id).await?;
    Ok(Json(DataDto::new(item)))
}

#[utoipa::path(
    post,
    path = "/api/education",
    tag = EDUCATION_TAG,
    request_body = CreateEducationDto,
    responses(
        (status = 201, description = "Education item created", body = entity::education::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_education_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEducationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let item = ContentService::<Education>::new(&state.db).create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("Education item created successfully", item)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/education/{id}",
    tag = EDUCATION_TAG,
    params(("id" = i32, Path, description = "Education id")),
    request_body = UpdateEducationDto,
    responses(
        (status = 200, description = "Education item updated", body = entity::education::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Education item not found", body = ErrorDto)
    ),
)]
pub async fn update_education_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEducationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let item = ContentService::<Education>::new(&state.db).update(id, payload).await?;
    Ok(Json(MessageDataDto::new(
        "Education item updated successfully",
        item,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/education/{id}",
    tag = EDUCATION_TAG,
    params(("id" = i32, Path, description = "Education id")),
    responses(
        (status = 200, description = "Education item deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Education item not found", body = ErrorDto)
    ),
)]
pub async fn delete_education_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<Education>::new(&state.db).delete(id).await?;
    Ok(Json(MessageDto::new("Education item deleted successfully")))
}
