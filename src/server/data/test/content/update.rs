use super::*;

/// Tests that a partial update changes only the submitted fields.
#[tokio::test]
async fn partial_update_retains_unspecified_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::team_member::TeamMemberFactory::new(db)
        .name("Dr. Mehmet")
        .title("Neurosurgeon")
        .bio("Fifteen years of spine surgery experience.")
        .order(2)
        .build()
        .await?;

    let repo = ContentRepository::<TeamMember>::new(db);
    let updated = repo
        .update(
            member.id,
            UpdateTeamMemberDto {
                name: None,
                title: Some("Chief Neurosurgeon".to_string()),
                bio: None,
                image_url: None,
                order: None,
            },
        )
        .await?;

    assert_eq!(updated.title, "Chief Neurosurgeon");
    assert_eq!(updated.name, "Dr. Mehmet");
    assert_eq!(
        updated.bio.as_deref(),
        Some("Fifteen years of spine surgery experience.")
    );
    assert_eq!(updated.order, 2);

    Ok(())
}

/// Tests that updating a missing id reports RecordNotUpdated.
#[tokio::test]
async fn update_of_missing_record_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ContentRepository::<TeamMember>::new(db)
        .update(
            404,
            UpdateTeamMemberDto {
                name: Some("Ghost".to_string()),
                title: None,
                bio: None,
                image_url: None,
                order: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
