use super::*;

/// Tests that unpublished courses are still returned by ID.
///
/// Expected: Ok(Some) with the draft course
#[tokio::test]
async fn finds_unpublished_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = factory::course::CourseFactory::new(db)
        .title("Draft")
        .published(false)
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let course = repo.find_by_id(draft.id).await?.unwrap();

    assert_eq!(course.title, "Draft");
    assert!(!course.published);

    Ok(())
}

/// Tests looking up an unknown course.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
