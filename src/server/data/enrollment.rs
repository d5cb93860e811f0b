//! Enrollment data repository.
//!
//! Enrollments are keyed by `(user_id, course_id)`; the composite primary key makes a
//! second enrollment of the same user in the same course a unique violation.

use chrono::Utc;
use entity::enrollment::EnrollmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::course::{CreateEnrollmentParam, Enrollment};

pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an enrollment.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment without its course loaded
    /// - `Err(DbErr)` - Database error, including a unique violation on a duplicate
    pub async fn create(&self, param: CreateEnrollmentParam) -> Result<Enrollment, DbErr> {
        let entity = entity::enrollment::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            course_id: ActiveValue::Set(param.course_id),
            progress: ActiveValue::Set(param.progress),
            status: ActiveValue::Set(param.status),
            enrolled_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Enrollment::from_entity(entity, None))
    }

    pub async fn find(&self, user_id: i32, course_id: i32) -> Result<Option<Enrollment>, DbErr> {
        let entity = entity::prelude::Enrollment::find_by_id((user_id, course_id))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| Enrollment::from_entity(e, None)))
    }

    /// Gets a user's enrollments with their courses, most recent first.
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - Enrollments with `course` populated
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_with_course(&self, user_id: i32) -> Result<Vec<Enrollment>, DbErr> {
        let rows = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Course)
            .order_by_desc(entity::enrollment::Column::EnrolledAt)
            .order_by_desc(entity::enrollment::Column::CourseId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(enrollment, course)| Enrollment::from_entity(enrollment, course))
            .collect())
    }

    /// Sets the completion percentage and status of an enrollment.
    ///
    /// # Returns
    /// - `Ok(true)` - Enrollment updated
    /// - `Ok(false)` - No enrollment for that user and course
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_progress(
        &self,
        user_id: i32,
        course_id: i32,
        progress: i32,
        status: EnrollmentStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Enrollment::update_many()
            .col_expr(
                entity::enrollment::Column::Progress,
                sea_orm::sea_query::Expr::value(progress),
            )
            .col_expr(
                entity::enrollment::Column::Status,
                sea_orm::sea_query::Expr::value(status),
            )
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
