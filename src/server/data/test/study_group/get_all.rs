use super::*;

/// Tests that groups are listed newest first.
///
/// Groups created in the same instant fall back to descending ID.
///
/// Expected: Ok with groups in reverse creation order
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::study_group::create_study_group(db).await?;
    let second = factory::study_group::create_study_group(db).await?;
    let third = factory::study_group::create_study_group(db).await?;

    let repo = StudyGroupRepository::new(db);
    let groups = repo.get_all().await?;

    let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    let selected = repo.get_by_ids(&[first.id, third.id]).await?;
    let ids: Vec<i32> = selected.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![third.id, first.id]);

    Ok(())
}
