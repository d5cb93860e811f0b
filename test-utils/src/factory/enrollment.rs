//! Enrollment factory for linking users to courses in tests.

use chrono::Utc;
use entity::enrollment::EnrollmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test enrollments.
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    course_id: i32,
    progress: i32,
    status: EnrollmentStatus,
}

impl<'a> EnrollmentFactory<'a> {
    /// Creates a new EnrollmentFactory with progress `0` and status `InProgress`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, course_id: i32) -> Self {
        Self {
            db,
            user_id,
            course_id,
            progress: 0,
            status: EnrollmentStatus::InProgress,
        }
    }

    pub fn progress(mut self, progress: i32) -> Self {
        self.progress = progress;
        self
    }

    pub fn status(mut self, status: EnrollmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the enrollment entity into the database.
    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            course_id: ActiveValue::Set(self.course_id),
            progress: ActiveValue::Set(self.progress),
            status: ActiveValue::Set(self.status),
            enrolled_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Enrolls a user into a course with default values.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    user_id: i32,
    course_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, user_id, course_id).build().await
}
