use super::*;

/// Tests that the creator becomes the only member, as ADMIN.
///
/// Expected: Ok with member_count 1 and exactly one ADMIN membership
#[tokio::test]
async fn creator_is_sole_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;

    let service = GroupService::new(db);
    let result = service
        .create(creator.id, group_param("Night Owls", 5))
        .await?;

    assert_eq!(result.group.member_count, 1);
    assert_eq!(result.group.max_members, 5);
    assert_eq!(result.members.len(), 1);
    assert_eq!(result.members[0].user_id, creator.id);
    assert_eq!(result.members[0].role, GroupRole::Admin);
    assert_eq!(
        result.members[0].user.as_ref().map(|u| u.id),
        Some(creator.id)
    );

    Ok(())
}

/// Tests validation of the group payload.
///
/// Expected: Err(BadRequest) for an empty name and for zero capacity
#[tokio::test]
async fn rejects_invalid_payloads() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;

    let service = GroupService::new(db);
    let empty_name = service.create(creator.id, group_param("", 5)).await;
    let zero_capacity = service.create(creator.id, group_param("Solo", 0)).await;

    assert!(matches!(empty_name, Err(AppError::BadRequest(_))));
    assert!(matches!(zero_capacity, Err(AppError::BadRequest(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests creating a group for a course that does not exist.
///
/// Expected: Err(NotFound) and no group written
#[tokio::test]
async fn rejects_unknown_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;

    let service = GroupService::new(db);
    let result = service
        .create(
            creator.id,
            CreateGroupParam {
                course_id: Some(404),
                ..group_param("Orphans", 5)
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}
