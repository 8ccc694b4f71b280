use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Project;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::project::{CreateProjectDto, UpdateProjectDto},
        service::content::ContentService,
        state::AppState,
    },
};

pub static PROJECT_TAG: &str = "projects";

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses((status = 200, description = "All projects", body = Vec<entity::project::Model>)),
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let projects = ContentService::<Project>::new(&state.db).list().await?;
    Ok(Json(DataDto::new(projects)))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = entity::project::Model),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let project = ContentService::<Project>::new(&state.db).get_by_id(id).await?;
    Ok(Json(DataDto::new(project)))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = entity::project::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let project = ContentService::<Project>::new(&state.db).create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("Project created successfully", project)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project id")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = entity::project::Model),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let project = ContentService::<Project>::new(&state.db).update(id, payload).await?;
    Ok(Json(MessageDataDto::new("Project updated successfully", project)))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<Project>::new(&state.db).delete(id).await?;
    Ok(Json(MessageDto::new("Project deleted successfully")))
}
