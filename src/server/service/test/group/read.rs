use super::*;

/// Tests listing every group and the caller's groups.
///
/// Expected: all groups newest first, and only the joined group for the member
#[tokio::test]
async fn lists_all_and_user_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_group_with_owner(db, 5).await?;
    let (_, second) = factory::helpers::create_group_with_owner(db, 5).await?;
    let members = factory::helpers::add_members(db, &first, 1).await?;

    let service = GroupService::new(db);

    let all = service.get_all().await?;
    let ids: Vec<i32> = all.iter().map(|g| g.group.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(all[1].members.len(), 2);
    assert_eq!(all[0].members.len(), 1);

    let mine = service.get_user_groups(members[0].id).await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].group.id, first.id);
    assert_eq!(mine[0].members.len(), 2);

    Ok(())
}

/// Tests reading a group that does not exist.
///
/// Expected: Err(GroupError::NotFound)
#[tokio::test]
async fn get_by_id_fails_for_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db).get_by_id(8).await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::NotFound))
    ));

    Ok(())
}
