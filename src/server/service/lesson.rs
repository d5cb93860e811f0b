use sea_orm::DatabaseConnection;

use crate::server::{
    data::lesson::LessonRepository,
    error::AppError,
    model::lesson::{Lesson, LessonWithCourse},
};

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the lessons of a course ordered by `order_index`.
    ///
    /// An unknown course yields an empty list rather than an error.
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<Lesson>, AppError> {
        let lessons = LessonRepository::new(self.db)
            .get_by_course_id(course_id)
            .await?;

        Ok(lessons)
    }

    /// Gets a lesson with its parent course.
    ///
    /// # Returns
    /// - `Ok(LessonWithCourse)` - Lesson and course
    /// - `Err(AppError::NotFound)` - No lesson with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<LessonWithCourse, AppError> {
        LessonRepository::new(self.db)
            .find_with_course(id)
            .await?
            .ok_or_else(|| lesson_not_found(id))
    }
}

pub(crate) fn lesson_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Lesson with ID {} not found", id))
}
