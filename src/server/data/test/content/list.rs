use super::*;

/// Tests that team members are listed by their explicit order field
/// ascending, not by creation time.
#[tokio::test]
async fn lists_team_members_by_order_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team_member::TeamMemberFactory::new(db)
        .name("Second")
        .order(2)
        .build()
        .await?;
    factory::team_member::TeamMemberFactory::new(db)
        .name("First")
        .order(1)
        .build()
        .await?;
    factory::team_member::TeamMemberFactory::new(db)
        .name("Third")
        .order(3)
        .build()
        .await?;

    let members = ContentRepository::<TeamMember>::new(db).list().await?;
    let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);

    Ok(())
}

/// Tests that every other entity lists newest first.
#[tokio::test]
async fn lists_news_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = chrono::Utc::now();
    factory::news::NewsFactory::new(db)
        .title("Oldest")
        .created_at(base - chrono::Duration::hours(3))
        .build()
        .await?;
    factory::news::NewsFactory::new(db)
        .title("Newest")
        .created_at(base)
        .build()
        .await?;
    factory::news::NewsFactory::new(db)
        .title("Middle")
        .created_at(base - chrono::Duration::hours(1))
        .build()
        .await?;

    let items = ContentRepository::<News>::new(db).list().await?;
    let titles: Vec<_> = items.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Newest", "Middle", "Oldest"]);

    Ok(())
}

/// Tests that listing an empty table returns an empty vector.
#[tokio::test]
async fn lists_nothing_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ContentRepository::<News>::new(db).list().await?.is_empty());

    Ok(())
}
