use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::admin::AdminRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Guard applied by every mutating handler.
///
/// Resolves the admin referenced by the current session, rejecting with 401
/// when there is no session or the referenced admin no longer exists.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(&self) -> Result<entity::admin::Model, AppError> {
        let Some(admin_id) = AuthSession::new(self.session).admin_id().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(admin) = AdminRepository::new(self.db).find_by_id(admin_id).await? else {
            return Err(AuthError::AdminNotInDatabase(admin_id).into());
        };

        Ok(admin)
    }
}
