//! Type-safe wrapper over the tower-sessions session.
//!
//! Centralizes the session keys so handlers never touch raw string keys,
//! and keeps the login/logout lifecycle in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_ADMIN_ID: &str = "auth:admin_id";
const SESSION_ADMIN_USERNAME: &str = "auth:admin_username";

/// Authentication view of the current session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session after successful credential
    /// verification.
    pub async fn log_in(&self, admin_id: i32, username: &str) -> Result<(), AppError> {
        self.session.insert(SESSION_ADMIN_ID, admin_id).await?;
        self.session
            .insert(SESSION_ADMIN_USERNAME, username.to_string())
            .await?;
        Ok(())
    }

    /// The admin id of the current session, if any.
    pub async fn admin_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_ADMIN_ID).await?)
    }

    /// Destroys the session in the backing store and clears the cookie.
    pub async fn log_out(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
