use super::*;

/// Tests creating a team member with only the required fields.
///
/// The order field defaults to 0 and the round trip through get_by_id
/// returns the submitted values.
#[tokio::test]
async fn creates_team_member_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContentRepository::<TeamMember>::new(db);
    let created = repo
        .create(CreateTeamMemberDto {
            name: "Dr. A".to_string(),
            title: "Surgeon".to_string(),
            bio: None,
            image_url: None,
            order: None,
        })
        .await?;

    assert_eq!(created.name, "Dr. A");
    assert_eq!(created.title, "Surgeon");
    assert_eq!(created.order, 0);
    assert!(created.bio.is_none());

    let fetched = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(fetched, created);

    Ok(())
}

/// Tests that every submitted field of a FAQ entry survives the round trip.
#[tokio::test]
async fn creates_faq_entry_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Faq).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContentRepository::<Faq>::new(db);
    let created = repo
        .create(CreateFaqDto {
            question: "How long is recovery?".to_string(),
            answer: "It depends on the procedure.".to_string(),
            category: Some("surgery".to_string()),
            order: Some(3),
            status: Some("active".to_string()),
        })
        .await?;

    let fetched = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.question, "How long is recovery?");
    assert_eq!(fetched.answer, "It depends on the procedure.");
    assert_eq!(fetched.category.as_deref(), Some("surgery"));
    assert_eq!(fetched.order, 3);
    assert_eq!(fetched.status.as_deref(), Some("active"));

    Ok(())
}

/// Tests that a duplicate treatment slug hits the unique constraint and
/// leaves a single record behind.
#[tokio::test]
async fn rejects_duplicate_treatment_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Treatment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::treatment::create_treatment_with_slug(db, "spine-stabilization").await?;

    let repo = ContentRepository::<Treatment>::new(db);
    let result = repo
        .create(CreateTreatmentDto {
            title: "Second".to_string(),
            slug: "spine-stabilization".to_string(),
            summary: None,
            content: None,
            image_url: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    assert_eq!(repo.list().await?.len(), 1);

    Ok(())
}
