use super::*;

/// Tests enrolling in a course.
///
/// Expected: Ok with progress 0, IN_PROGRESS and the course attached
#[tokio::test]
async fn enrolls_with_zero_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;

    let service = CourseService::new(db);
    let enrollment = service.enroll(user.id, course.id).await?;

    assert_eq!(enrollment.user_id, user.id);
    assert_eq!(enrollment.progress, 0);
    assert_eq!(enrollment.status, EnrollmentStatus::InProgress);
    assert_eq!(enrollment.course.map(|c| c.id), Some(course.id));

    let enrollments = service.get_user_enrollments(user.id).await?;
    assert_eq!(enrollments.len(), 1);

    Ok(())
}

/// Tests enrolling twice in the same course.
///
/// Expected: Err(Forbidden) and still one enrollment
#[tokio::test]
async fn rejects_duplicate_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;

    let service = CourseService::new(db);
    service.enroll(user.id, course.id).await?;
    let result = service.enroll(user.id, course.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(service.get_user_enrollments(user.id).await?.len(), 1);

    Ok(())
}

/// Tests enrolling in a course that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = CourseService::new(db);
    let result = service.enroll(user.id, 42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
