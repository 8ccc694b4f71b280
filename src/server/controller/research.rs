use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Research;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::research::{CreateResearchDto, UpdateResearchDto},
        service::content::ContentService,
        state::AppState,
    },
};

pub static RESEARCH_TAG: &str = "research";

#[utoipa::path(
    get,
    path = "/api/researches",
    tag = RESEARCH_TAG,
    responses((status = 200, description = "All research entries", body = Vec<entity::research::Model>)),
)]
pub async fn list_research(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = ContentService::<Research>::new(&state.db).list().await?;
    Ok(Json(DataDto::new(entries)))
}

#[utoipa::path(
    get,
    path = "/api/researches/{id}",
    tag = RESEARCH_TAG,
    params(("id" = i32, Path, description = "Research id")),
    responses(
        (status = 200, description = "Research entry", body = entity::research::Model),
        (status = 404, description = "Research not found", body = ErrorDto)
    ),
)]
pub async fn get_research(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let entry = ContentService::<Research>::new(&state.db).get_by_id(id).await?;
    Ok(Json(DataDto::new(entry)))
}

#[utoipa::path(
    post,
    path = "/api/researches",
    tag = RESEARCH_TAG,
    request_body = CreateResearchDto,
    responses(
        (status = 201, description = "Research created", body = entity::research::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_research(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateResearchDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let entry = ContentService::<Research>::new(&state.db).create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("Research created successfully", entry)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/researches/{id}",
    tag = RESEARCH_TAG,
    params(("id" = i32, Path, description = "Research id")),
    request_body = UpdateResearchDto,
    responses(
        (status = 200, description = "Research updated", body = entity::research::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Research not found", body = ErrorDto)
    ),
)]
pub async fn update_research(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateResearchDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let entry = ContentService::<Research>::new(&state.db).update(id, payload).await?;
    Ok(Json(MessageDataDto::new("Research updated successfully", entry)))
}

#[utoipa::path(
    delete,
    path = "/api/researches/{id}",
    tag = RESEARCH_TAG,
    params(("id" = i32, Path, description = "Research id")),
    responses(
        (status = 200, description = "Research deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Research not found", body = ErrorDto)
    ),
)]
pub async fn delete_research(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<Research>::new(&state.db).delete(id).await?;
    Ok(Json(MessageDto::new("Research deleted successfully")))
}
