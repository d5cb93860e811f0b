use super::*;

/// Tests updating percentage and status of an enrollment.
///
/// Expected: Ok(true) and stored values changed
#[tokio::test]
async fn updates_existing_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;
    factory::enrollment::create_enrollment(db, user.id, course.id).await?;

    let repo = EnrollmentRepository::new(db);
    let updated = repo
        .update_progress(user.id, course.id, 100, EnrollmentStatus::Completed)
        .await?;

    assert!(updated);
    let enrollment = repo.find(user.id, course.id).await?.unwrap();
    assert_eq!(enrollment.progress, 100);
    assert_eq!(enrollment.status, EnrollmentStatus::Completed);

    Ok(())
}

/// Tests updating a missing enrollment.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;

    let repo = EnrollmentRepository::new(db);
    let updated = repo
        .update_progress(user.id, course.id, 50, EnrollmentStatus::InProgress)
        .await?;

    assert!(!updated);

    Ok(())
}
