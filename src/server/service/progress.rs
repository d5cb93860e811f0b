//! Lesson progress tracking.
//!
//! Recording progress on a lesson also refreshes the completion percentage of the
//! user's enrollment in the lesson's course, in the same transaction.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        enrollment::EnrollmentRepository, lesson::LessonRepository, progress::ProgressRepository,
    },
    error::AppError,
    model::progress::{
        completion_percent, status_for_percent, CourseProgress, Dashboard, DashboardStats,
        Progress, UpsertProgressParam,
    },
    service::lesson::lesson_not_found,
};

pub struct ProgressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records whether a user completed a lesson.
    ///
    /// `completed_at` is stamped when the lesson becomes completed, kept while it stays
    /// completed, and cleared when it is marked incomplete. If the user is enrolled in
    /// the lesson's course, the enrollment progress and status are recomputed.
    ///
    /// # Returns
    /// - `Ok(Progress)` - The stored progress row
    /// - `Err(AppError::NotFound)` - No lesson with that ID
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn update(&self, param: UpsertProgressParam) -> Result<Progress, AppError> {
        let lesson = LessonRepository::new(self.db)
            .find_by_id(param.lesson_id)
            .await?
            .ok_or_else(|| lesson_not_found(param.lesson_id))?;

        let txn = self.db.begin().await?;

        // First statement is a write so concurrent updates queue on the write lock
        // instead of failing on a stale read snapshot.
        let progress_repo = ProgressRepository::new(&txn);
        let progress = progress_repo
            .upsert(
                param.user_id,
                param.lesson_id,
                param.completed,
                param.completed.then(Utc::now),
            )
            .await?;

        let enrollment_repo = EnrollmentRepository::new(&txn);
        if enrollment_repo
            .find(param.user_id, lesson.course_id)
            .await?
            .is_some()
        {
            let total = LessonRepository::new(&txn)
                .count_by_course_ids(&[lesson.course_id])
                .await?;
            let completed = progress_repo
                .count_completed_in_course(param.user_id, lesson.course_id)
                .await?;

            let percent = completion_percent(completed, total);
            enrollment_repo
                .update_progress(
                    param.user_id,
                    lesson.course_id,
                    percent,
                    status_for_percent(percent),
                )
                .await?;
        }

        txn.commit().await?;

        Ok(progress)
    }

    /// Gets the lessons of a course and the user's progress rows for them.
    pub async fn get_course_progress(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<CourseProgress, AppError> {
        let lessons = LessonRepository::new(self.db)
            .get_by_course_id(course_id)
            .await?;

        let lesson_ids: Vec<i32> = lessons.iter().map(|l| l.id).collect();
        let progress = ProgressRepository::new(self.db)
            .get_by_user_and_lessons(user_id, &lesson_ids)
            .await?;

        Ok(CourseProgress { lessons, progress })
    }

    /// Gets the user's enrollments with aggregate statistics.
    pub async fn get_dashboard(&self, user_id: i32) -> Result<Dashboard, AppError> {
        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_user_with_course(user_id)
            .await?;

        let course_ids: Vec<i32> = enrollments.iter().map(|e| e.course_id).collect();
        let total_lessons = LessonRepository::new(self.db)
            .count_by_course_ids(&course_ids)
            .await?;
        let completed_lessons = ProgressRepository::new(self.db)
            .count_completed_by_user(user_id)
            .await?;

        let courses_completed = enrollments
            .iter()
            .filter(|e| e.status == entity::enrollment::EnrollmentStatus::Completed)
            .count() as u64;

        Ok(Dashboard {
            stats: DashboardStats {
                courses_enrolled: enrollments.len() as u64,
                courses_completed,
                total_lessons,
                completed_lessons,
            },
            enrollments,
        })
    }
}
