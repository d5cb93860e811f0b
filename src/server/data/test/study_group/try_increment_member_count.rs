use super::*;

/// Tests taking a free seat.
///
/// Expected: Ok(true) and count incremented
#[tokio::test]
async fn takes_free_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_owner(db, 2).await?;

    let repo = StudyGroupRepository::new(db);

    assert!(repo.try_increment_member_count(group.id).await?);
    assert_eq!(stored_count(db, group.id).await?, 2);

    Ok(())
}

/// Tests that a full group never goes above its capacity.
///
/// Expected: Ok(false) and count unchanged
#[tokio::test]
async fn refuses_when_full() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_owner(db, 2).await?;
    factory::helpers::add_members(db, &group, 1).await?;

    let repo = StudyGroupRepository::new(db);

    assert!(!repo.try_increment_member_count(group.id).await?);
    assert!(!repo.try_increment_member_count(group.id).await?);
    assert_eq!(stored_count(db, group.id).await?, 2);

    Ok(())
}

/// Tests an unknown group.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_unknown_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudyGroupRepository::new(db);

    assert!(!repo.try_increment_member_count(404).await?);

    Ok(())
}
