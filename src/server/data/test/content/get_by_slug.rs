use super::*;

/// Tests fetching a treatment through its slug.
#[tokio::test]
async fn returns_treatment_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Treatment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let treatment =
        factory::treatment::create_treatment_with_slug(db, "minimally-invasive-surgery").await?;

    let fetched = ContentRepository::<Treatment>::new(db)
        .get_by_slug("minimally-invasive-surgery")
        .await?;
    assert_eq!(fetched.map(|t| t.id), Some(treatment.id));

    Ok(())
}

/// Tests that an unknown slug yields None.
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Treatment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::treatment::create_treatment(db).await?;

    let fetched = ContentRepository::<Treatment>::new(db)
        .get_by_slug("does-not-exist")
        .await?;
    assert!(fetched.is_none());

    Ok(())
}
