use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository, lesson::LessonRepository},
    error::AppError,
    model::course::{Course, CourseWithLessons, CreateEnrollmentParam, Enrollment},
    util::db::is_unique_violation,
};

const ALREADY_ENROLLED: &str = "Already enrolled in this course";

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the published catalog, newest first.
    pub async fn get_published(&self) -> Result<Vec<Course>, AppError> {
        let courses = CourseRepository::new(self.db).get_published().await?;

        Ok(courses)
    }

    /// Gets a course with its lessons in display order.
    ///
    /// # Returns
    /// - `Ok(CourseWithLessons)` - Course and ordered lessons
    /// - `Err(AppError::NotFound)` - No course with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<CourseWithLessons, AppError> {
        let course = CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| course_not_found(id))?;

        let lessons = LessonRepository::new(self.db).get_by_course_id(id).await?;

        Ok(CourseWithLessons { course, lessons })
    }

    /// Enrolls a user in a course with zero progress.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The new enrollment with its course
    /// - `Err(AppError::NotFound)` - No course with that ID
    /// - `Err(AppError::Forbidden)` - The user is already enrolled
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn enroll(&self, user_id: i32, course_id: i32) -> Result<Enrollment, AppError> {
        let course = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| course_not_found(course_id))?;

        let enrollment_repo = EnrollmentRepository::new(self.db);

        if enrollment_repo.find(user_id, course_id).await?.is_some() {
            return Err(AppError::Forbidden(ALREADY_ENROLLED.to_string()));
        }

        let mut enrollment = enrollment_repo
            .create(CreateEnrollmentParam::new(user_id, course_id))
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Forbidden(ALREADY_ENROLLED.to_string())
                } else {
                    AppError::from(e)
                }
            })?;
        enrollment.course = Some(course);

        Ok(enrollment)
    }

    /// Gets a user's enrollments with their courses, most recent first.
    pub async fn get_user_enrollments(&self, user_id: i32) -> Result<Vec<Enrollment>, AppError> {
        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_user_with_course(user_id)
            .await?;

        Ok(enrollments)
    }
}

pub(crate) fn course_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Course with ID {} not found", id))
}
