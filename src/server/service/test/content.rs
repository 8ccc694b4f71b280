use entity::prelude::Treatment;
use test_utils::{builder::TestBuilder, error::TestError, factory};

use crate::server::{
    error::AppError,
    model::treatment::{CreateTreatmentDto, UpdateTreatmentDto},
    service::content::ContentService,
};

/// Tests that a duplicate slug surfaces as Conflict, not as a generic
/// database error.
#[tokio::test]
async fn duplicate_slug_yields_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(Treatment).build().await?;
    let db = test.db.as_ref().unwrap();

    factory::treatment::create_treatment_with_slug(db, "disc-replacement").await?;

    let result = ContentService::<Treatment>::new(db)
        .create(CreateTreatmentDto {
            title: "Disc Replacement".to_string(),
            slug: "disc-replacement".to_string(),
            summary: None,
            content: None,
            image_url: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that reads of missing records surface as NotFound with the entity
/// name in the message.
#[tokio::test]
async fn missing_record_yields_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(Treatment).build().await?;
    let db = test.db.as_ref().unwrap();

    let service = ContentService::<Treatment>::new(db);

    let err = service.get_by_id(404).await.unwrap_err();
    assert!(matches!(&err, AppError::NotFound(msg) if msg == "Treatment not found"));

    let err = service.get_by_slug("nope").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests that updates and deletes of missing records surface as NotFound.
#[tokio::test]
async fn mutations_of_missing_record_yield_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(Treatment).build().await?;
    let db = test.db.as_ref().unwrap();

    let service = ContentService::<Treatment>::new(db);

    let err = service
        .update(
            404,
            UpdateTreatmentDto {
                title: Some("Ghost".to_string()),
                slug: None,
                summary: None,
                content: None,
                image_url: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = service.delete(404).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests the create/get/delete flow at the service level.
#[tokio::test]
async fn create_get_delete_flow() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(Treatment).build().await?;
    let db = test.db.as_ref().unwrap();

    let service = ContentService::<Treatment>::new(db);

    let created = service
        .create(CreateTreatmentDto {
            title: "Kyphoplasty".to_string(),
            slug: "kyphoplasty".to_string(),
            summary: Some("Vertebral fracture treatment".to_string()),
            content: None,
            image_url: None,
        })
        .await
        .unwrap();

    let fetched = service.get_by_slug("kyphoplasty").await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.summary.as_deref(), Some("Vertebral fracture treatment"));

    service.delete(created.id).await.unwrap();
    assert!(matches!(
        service.get_by_id(created.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
