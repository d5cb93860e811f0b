use super::*;

/// Tests adding a membership row.
///
/// Expected: Ok with the given role and the membership visible
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let group = factory::study_group::create_study_group(db).await?;

    let repo = GroupMemberRepository::new(db);
    let member = repo.create(group.id, user.id, GroupRole::Member).await?;

    assert_eq!(member.group_id, group.id);
    assert_eq!(member.user_id, user.id);
    assert_eq!(member.role, GroupRole::Member);
    assert!(repo.exists(group.id, user.id).await?);

    Ok(())
}

/// Tests that the composite key rejects a second membership of the same user.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, group) = factory::helpers::create_group_with_owner(db, 5).await?;

    let repo = GroupMemberRepository::new(db);
    let err = repo
        .create(group.id, owner.id, GroupRole::Member)
        .await
        .unwrap_err();

    assert!(crate::server::util::db::is_unique_violation(&err));

    Ok(())
}
