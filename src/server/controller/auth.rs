use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        data::admin::AdminRepository,
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        model::auth::{AdminDto, LoginDto, LoginResponseDto, SessionDto},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Admin login.
///
/// Verifies the credentials against the stored bcrypt hash and establishes
/// a server-side session on success. An unknown username and a wrong
/// password produce the same response.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Missing username or password", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let admin = AdminRepository::new(&state.db)
        .find_by_username(&payload.username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let valid = bcrypt::verify(&payload.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !valid {
        return Err(AuthError::InvalidCredentials.into());
    }

    AuthSession::new(&session)
        .log_in(admin.id, &admin.username)
        .await?;

    Ok(Json(LoginResponseDto {
        ok: true,
        message: "Login successful".to_string(),
        admin: AdminDto::from_entity(admin),
    }))
}

/// Admin logout. Destroys the session in the backing store.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Session store failure", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).log_out().await?;

    Ok(Json(MessageDto::new("Logged out successfully")))
}

/// Returns the admin bound to the current session, or 401.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Active session", body = SessionDto),
        (status = 401, description = "No valid session", body = ErrorDto)
    ),
)]
pub async fn check_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require().await?;

    Ok(Json(SessionDto {
        ok: true,
        admin: AdminDto::from_entity(admin),
    }))
}
