use super::*;

/// Tests loading a course with its lessons in display order.
///
/// Lessons are created out of order.
///
/// Expected: Ok with lessons sorted by order_index
#[tokio::test]
async fn returns_course_with_ordered_lessons() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::create_course(db).await?;
    for order_index in [3, 1, 2] {
        factory::lesson::LessonFactory::new(db, course.id)
            .order_index(order_index)
            .build()
            .await?;
    }

    let service = CourseService::new(db);
    let result = service.get_by_id(course.id).await?;

    assert_eq!(result.course.id, course.id);
    let order: Vec<i32> = result.lessons.iter().map(|l| l.order_index).collect();
    assert_eq!(order, vec![1, 2, 3]);

    Ok(())
}

/// Tests loading a course that does not exist.
///
/// Expected: Err(NotFound) naming the ID
#[tokio::test]
async fn fails_for_unknown_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourseService::new(db);
    let result = service.get_by_id(999).await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "Course with ID 999 not found")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
