use super::*;

/// Tests that delete removes the record and a subsequent fetch finds
/// nothing.
#[tokio::test]
async fn delete_then_get_yields_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Treatment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let treatment = factory::treatment::create_treatment(db).await?;

    let repo = ContentRepository::<Treatment>::new(db);
    let rows = repo.delete(treatment.id).await?;
    assert_eq!(rows, 1);

    assert!(repo.get_by_id(treatment.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a missing id affects no rows.
#[tokio::test]
async fn delete_of_missing_record_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Treatment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = ContentRepository::<Treatment>::new(db).delete(404).await?;
    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that deleting one record leaves the others untouched.
#[tokio::test]
async fn delete_is_scoped_to_one_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Treatment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::treatment::create_treatment(db).await?;
    let second = factory::treatment::create_treatment(db).await?;

    let repo = ContentRepository::<Treatment>::new(db);
    repo.delete(first.id).await?;

    let remaining = repo.list().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    Ok(())
}
