use super::*;

/// Tests that only the user's rows for the requested lessons are returned.
///
/// Expected: Ok with the caller's rows for the selected lessons
#[tokio::test]
async fn filters_by_user_and_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let (_, lessons) = factory::helpers::create_course_with_lessons(db, 3).await?;

    let repo = ProgressRepository::new(db);
    repo.upsert(user.id, lessons[0].id, true, Some(Utc::now()))
        .await?;
    repo.upsert(user.id, lessons[2].id, false, None).await?;
    repo.upsert(other.id, lessons[1].id, true, Some(Utc::now()))
        .await?;

    let ids: Vec<i32> = lessons.iter().map(|l| l.id).collect();
    let rows = repo.get_by_user_and_lessons(user.id, &ids).await?;

    let lesson_ids: Vec<i32> = rows.iter().map(|p| p.lesson_id).collect();
    assert_eq!(lesson_ids, vec![lessons[0].id, lessons[2].id]);
    assert!(rows.iter().all(|p| p.user_id == user.id));

    Ok(())
}
