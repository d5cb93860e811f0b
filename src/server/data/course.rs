//! Course data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::course::{Course, CreateCourseParam};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new course.
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category),
            level: ActiveValue::Set(param.level),
            duration: ActiveValue::Set(param.duration),
            emoji: ActiveValue::Set(param.emoji),
            rating: ActiveValue::Set(param.rating),
            students: ActiveValue::Set(param.students),
            published: ActiveValue::Set(param.published),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Gets all published courses, newest first.
    ///
    /// Courses created at the same instant are ordered by descending ID so the
    /// listing is stable.
    ///
    /// # Returns
    /// - `Ok(Vec<Course>)` - Published courses (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_published(&self) -> Result<Vec<Course>, DbErr> {
        let entities = entity::prelude::Course::find()
            .filter(entity::course::Column::Published.eq(true))
            .order_by_desc(entity::course::Column::CreatedAt)
            .order_by_desc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Finds a course by ID regardless of its published flag.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found
    /// - `Ok(None)` - No course with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Checks whether a course with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Course::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Counts all courses, published or not.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find().count(self.db).await
    }
}
