use super::*;

/// Tests leaving a group.
///
/// Expected: Ok, only the caller's row removed and the seat released
#[tokio::test]
async fn removes_only_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, group) = factory::helpers::create_group_with_owner(db, 5).await?;
    let members = factory::helpers::add_members(db, &group, 2).await?;

    let service = GroupService::new(db);
    service.leave(group.id, members[0].id).await?;

    let detail = service.get_by_id(group.id).await?;
    let user_ids: Vec<i32> = detail.members.iter().map(|m| m.user_id).collect();
    assert_eq!(detail.group.member_count, 2);
    assert!(user_ids.contains(&owner.id));
    assert!(user_ids.contains(&members[1].id));
    assert!(!user_ids.contains(&members[0].id));

    Ok(())
}

/// Tests leaving a group the caller is not in.
///
/// Expected: Err(MembershipNotFound) and the count unchanged
#[tokio::test]
async fn rejects_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_owner(db, 5).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = GroupService::new(db);
    let result = service.leave(group.id, stranger.id).await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::MembershipNotFound))
    ));
    assert_eq!(service.get_by_id(group.id).await?.group.member_count, 1);

    Ok(())
}

/// Tests that a freed seat can be taken again.
///
/// Expected: a full group admits a new member after one leaves
#[tokio::test]
async fn freed_seat_can_be_taken() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_owner(db, 2).await?;
    let members = factory::helpers::add_members(db, &group, 1).await?;
    let newcomer = factory::user::create_user(db).await?;

    let service = GroupService::new(db);
    assert!(service.join(group.id, newcomer.id).await.is_err());

    service.leave(group.id, members[0].id).await?;
    service.join(group.id, newcomer.id).await?;

    let detail = service.get_by_id(group.id).await?;
    assert_eq!(detail.members.len(), 2);
    assert_eq!(detail.group.member_count, 2);

    Ok(())
}
