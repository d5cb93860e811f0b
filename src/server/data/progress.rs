//! Lesson progress data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QuerySelect, RelationTrait,
};

use crate::server::model::progress::Progress;

pub struct ProgressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProgressRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates the progress row for a user and lesson.
    ///
    /// On conflict with the `(user_id, lesson_id)` primary key the existing row is
    /// overwritten, except that a row which is already completed keeps its original
    /// `completed_at` when completed again. The statement is a single write, so it can
    /// open a transaction without first taking a read snapshot.
    ///
    /// # Arguments
    /// - `user_id` - User the progress belongs to
    /// - `lesson_id` - Lesson the progress refers to
    /// - `completed` - Whether the lesson is completed
    /// - `completed_at` - Completion time, `None` when not completed
    ///
    /// # Returns
    /// - `Ok(Progress)` - The stored row
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        user_id: i32,
        lesson_id: i32,
        completed: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Progress, DbErr> {
        let entity = entity::prelude::Progress::insert(entity::progress::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            lesson_id: ActiveValue::Set(lesson_id),
            completed: ActiveValue::Set(completed),
            completed_at: ActiveValue::Set(completed_at),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::progress::Column::UserId,
                entity::progress::Column::LessonId,
            ])
            .update_columns([
                entity::progress::Column::Completed,
                entity::progress::Column::UpdatedAt,
            ])
            .value(
                entity::progress::Column::CompletedAt,
                Expr::cust(
                    "CASE WHEN NOT excluded.completed THEN NULL \
                     WHEN progress.completed THEN progress.completed_at \
                     ELSE excluded.completed_at END",
                ),
            )
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Progress::from_entity(entity))
    }

    /// Gets a user's progress rows for the given lessons.
    ///
    /// # Returns
    /// - `Ok(Vec<Progress>)` - Rows ordered by lesson ID (lessons without a row are absent)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_and_lessons(
        &self,
        user_id: i32,
        lesson_ids: &[i32],
    ) -> Result<Vec<Progress>, DbErr> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Progress::find()
            .filter(entity::progress::Column::UserId.eq(user_id))
            .filter(entity::progress::Column::LessonId.is_in(lesson_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut progress: Vec<Progress> = entities.into_iter().map(Progress::from_entity).collect();
        progress.sort_by_key(|p| p.lesson_id);

        Ok(progress)
    }

    /// Counts every lesson the user has completed across all courses.
    pub async fn count_completed_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Progress::find()
            .filter(entity::progress::Column::UserId.eq(user_id))
            .filter(entity::progress::Column::Completed.eq(true))
            .count(self.db)
            .await
    }

    /// Counts the lessons of one course the user has completed.
    pub async fn count_completed_in_course(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::Progress::find()
            .join(JoinType::InnerJoin, entity::progress::Relation::Lesson.def())
            .filter(entity::progress::Column::UserId.eq(user_id))
            .filter(entity::progress::Column::Completed.eq(true))
            .filter(entity::lesson::Column::CourseId.eq(course_id))
            .count(self.db)
            .await
    }
}
