use super::*;

/// Tests completed-lesson counts overall and per course.
///
/// Completes two lessons of one course and one lesson of another, and leaves one
/// lesson incomplete.
///
/// Expected: 3 overall, 2 in the first course
#[tokio::test]
async fn counts_completed_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (first, first_lessons) = factory::helpers::create_course_with_lessons(db, 3).await?;
    let (_, second_lessons) = factory::helpers::create_course_with_lessons(db, 1).await?;

    let repo = ProgressRepository::new(db);
    repo.upsert(user.id, first_lessons[0].id, true, Some(Utc::now()))
        .await?;
    repo.upsert(user.id, first_lessons[1].id, true, Some(Utc::now()))
        .await?;
    repo.upsert(user.id, first_lessons[2].id, false, None)
        .await?;
    repo.upsert(user.id, second_lessons[0].id, true, Some(Utc::now()))
        .await?;

    assert_eq!(repo.count_completed_by_user(user.id).await?, 3);
    assert_eq!(repo.count_completed_in_course(user.id, first.id).await?, 2);

    Ok(())
}
