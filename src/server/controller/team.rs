use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::TeamMember;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{DataDto, ErrorDto, MessageDataDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::team::{CreateTeamMemberDto, UpdateTeamMemberDto},
        service::content::ContentService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// List all team members.
///
/// Returns every doctor and staff member ordered by the explicit `order`
/// field ascending, the order they appear on the website.
#[utoipa::path(
    get,
    path = "/api/team",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Team members in display order", body = Vec<entity::team_member::Model>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_team(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = ContentService::<TeamMember>::new(&state.db).list().await?;

    Ok(Json(DataDto::new(members)))
}

/// Get a single team member by id.
#[utoipa::path(
    get,
    path = "/api/team/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team member id")),
    responses(
        (status = 200, description = "Team member", body = entity::team_member::Model),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = ContentService::<TeamMember>::new(&state.db)
        .get_by_id(id)
        .await?;

    Ok(Json(DataDto::new(member)))
}

/// Create a team member. Admin only.
#[utoipa::path(
    post,
    path = "/api/team",
    tag = TEAM_TAG,
    request_body = CreateTeamMemberDto,
    responses(
        (status = 201, description = "Team member created", body = entity::team_member::Model),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team_member(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let member = ContentService::<TeamMember>::new(&state.db)
        .create(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDataDto::new("Team member created successfully", member)),
    ))
}

/// Partially update a team member. Admin only; absent fields are retained.
#[utoipa::path(
    put,
    path = "/api/team/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team member id")),
    request_body = UpdateTeamMemberDto,
    responses(
        (status = 200, description = "Team member updated", body = entity::team_member::Model),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let member = ContentService::<TeamMember>::new(&state.db)
        .update(id, payload)
        .await?;

    Ok(Json(MessageDataDto::new(
        "Team member updated successfully",
        member,
    )))
}

/// Delete a team member. Admin only; deletion is immediate and permanent.
#[utoipa::path(
    delete,
    path = "/api/team/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team member id")),
    responses(
        (status = 200, description = "Team member deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    ContentService::<TeamMember>::new(&state.db)
        .delete(id)
        .await?;

    Ok(Json(MessageDto::new("Team member deleted successfully")))
}
