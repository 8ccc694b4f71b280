use entity::prelude::Admin;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::admin::AdminRepository;

/// Tests that a created admin can be looked up by username.
#[tokio::test]
async fn creates_and_finds_admin_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let created = repo.create("clinic_admin", "$2b$04$fakehash").await?;

    let found = repo.find_by_username("clinic_admin").await?;
    assert_eq!(found.as_ref().map(|a| a.id), Some(created.id));
    assert_eq!(found.unwrap().password_hash, "$2b$04$fakehash");

    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests that any_exists flips once the first admin is created.
#[tokio::test]
async fn any_exists_reflects_table_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    assert!(!repo.any_exists().await?);

    factory::admin::create_admin(db).await?;
    assert!(repo.any_exists().await?);

    Ok(())
}

/// Tests that the stored hash verifies the original password and rejects a
/// wrong one.
#[tokio::test]
async fn stored_hash_verifies_password() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::AdminFactory::new(db)
        .username("admin")
        .password("correct horse")
        .build()
        .await?;

    assert!(bcrypt::verify("correct horse", &admin.password_hash).unwrap());
    assert!(!bcrypt::verify("wrong horse", &admin.password_hash).unwrap());

    Ok(())
}

/// Tests that duplicate usernames violate the unique constraint.
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    repo.create("admin", "hash-one").await?;

    let result = repo.create("admin", "hash-two").await;
    assert!(result.is_err());

    Ok(())
}
