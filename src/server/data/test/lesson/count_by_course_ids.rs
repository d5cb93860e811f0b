use super::*;

/// Tests counting lessons across several courses.
///
/// Expected: Ok with the sum of the selected courses' lessons
#[tokio::test]
async fn counts_lessons_of_selected_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_course_with_lessons(db, 2).await?;
    let (second, _) = factory::helpers::create_course_with_lessons(db, 3).await?;
    factory::helpers::create_course_with_lessons(db, 4).await?;

    let repo = LessonRepository::new(db);

    assert_eq!(repo.count_by_course_ids(&[first.id, second.id]).await?, 5);
    assert_eq!(repo.count_by_course_ids(&[]).await?, 0);

    Ok(())
}
