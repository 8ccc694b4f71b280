use entity::prelude::Admin;
use test_utils::{builder::TestBuilder, error::TestError, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
};

/// Tests that a request without a logged-in session is rejected.
#[tokio::test]
async fn rejects_request_without_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_table(Admin).build().await?;
    let (db, session) = test.db_and_session().await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}

/// Tests that a session established through log_in resolves the admin.
#[tokio::test]
async fn allows_request_with_valid_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_table(Admin).build().await?;
    let (db, session) = test.db_and_session().await?;

    let admin = factory::admin::create_admin(db).await?;
    AuthSession::new(session)
        .log_in(admin.id, &admin.username)
        .await
        .unwrap();

    let resolved = AuthGuard::new(db, session).require().await.unwrap();
    assert_eq!(resolved.id, admin.id);
    assert_eq!(resolved.username, admin.username);

    Ok(())
}

/// Tests that a session pointing at a deleted admin is rejected.
#[tokio::test]
async fn rejects_session_with_dangling_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_table(Admin).build().await?;
    let (db, session) = test.db_and_session().await?;

    AuthSession::new(session).log_in(9999, "ghost").await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInDatabase(9999)))
    ));

    Ok(())
}

/// Tests that logging out clears the admin id from the session.
#[tokio::test]
async fn log_out_clears_the_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_table(Admin).build().await?;
    let (db, session) = test.db_and_session().await?;

    let admin = factory::admin::create_admin(db).await?;
    let auth = AuthSession::new(session);
    auth.log_in(admin.id, &admin.username).await.unwrap();
    assert_eq!(auth.admin_id().await.unwrap(), Some(admin.id));

    auth.log_out().await.unwrap();
    assert_eq!(auth.admin_id().await.unwrap(), None);

    Ok(())
}
