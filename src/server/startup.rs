use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, data::admin::AdminRepository, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations. This must
/// complete successfully before the application can serve requests.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same Sqlite database.
///
/// The session store creates its own table on first use. Sessions expire
/// after 24 hours of inactivity and the cookie is marked secure in
/// production.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());
    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {e}")))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(config.production)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24))))
}

/// Seeds the initial admin account when none exists.
///
/// Login is impossible without an admin row, so a fresh deployment creates
/// one from `ADMIN_USERNAME`/`ADMIN_PASSWORD`. An existing admin is never
/// touched, and a missing password only produces a warning so read-only
/// deployments still come up.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let repo = AdminRepository::new(db);

    if repo.any_exists().await? {
        return Ok(());
    }

    match &config.admin_password {
        Some(password) => {
            let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
                .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;
            let admin = repo.create(&config.admin_username, &hash).await?;
            tracing::info!(username = %admin.username, "Seeded initial admin account");
        }
        None => {
            tracing::warn!(
                "No admin account exists and ADMIN_PASSWORD is not set; admin login is unavailable"
            );
        }
    }

    Ok(())
}
