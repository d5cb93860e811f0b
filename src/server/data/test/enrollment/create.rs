use super::*;

/// Tests creating a fresh enrollment.
///
/// Expected: Ok with progress 0 and status InProgress
#[tokio::test]
async fn creates_enrollment_with_zero_progress() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollment = repo
        .create(CreateEnrollmentParam::new(user.id, course.id))
        .await?;

    assert_eq!(enrollment.user_id, user.id);
    assert_eq!(enrollment.course_id, course.id);
    assert_eq!(enrollment.progress, 0);
    assert_eq!(enrollment.status, EnrollmentStatus::InProgress);
    assert!(repo.find(user.id, course.id).await?.is_some());

    Ok(())
}

/// Tests that the same user cannot enroll twice in one course.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_enrollment() -> Result<(), DbErr> {
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
    let err = repo
        .create(CreateEnrollmentParam::new(user.id, course.id))
        .await
        .unwrap_err();

    assert!(crate::server::util::db::is_unique_violation(&err));

    Ok(())
}
