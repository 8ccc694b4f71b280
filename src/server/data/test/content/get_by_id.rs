use super::*;

/// Tests fetching an existing record by id.
#[tokio::test]
async fn returns_record_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::team_member::create_team_member(db).await?;

    let fetched = ContentRepository::<TeamMember>::new(db)
        .get_by_id(member.id)
        .await?;
    assert_eq!(fetched, Some(member));

    Ok(())
}

/// Tests that an unknown id yields None.
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fetched = ContentRepository::<TeamMember>::new(db).get_by_id(999).await?;
    assert!(fetched.is_none());

    Ok(())
}
