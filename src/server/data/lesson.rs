//! Lesson data repository.
//!
//! Lessons are always returned ordered by `order_index` ascending.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    course::Course,
    lesson::{CreateLessonParam, Lesson, LessonWithCourse},
};

pub struct LessonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LessonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new lesson.
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The created lesson
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   course already has a lesson at `order_index`
    pub async fn create(&self, param: CreateLessonParam) -> Result<Lesson, DbErr> {
        let entity = entity::lesson::ActiveModel {
            course_id: ActiveValue::Set(param.course_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            lesson_type: ActiveValue::Set(param.lesson_type),
            content: ActiveValue::Set(param.content),
            duration: ActiveValue::Set(param.duration),
            order_index: ActiveValue::Set(param.order_index),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lesson::from_entity(entity))
    }

    /// Gets the lessons of a course in display order.
    ///
    /// # Returns
    /// - `Ok(Vec<Lesson>)` - Lessons ordered by `order_index` (empty for unknown courses)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_course_id(&self, course_id: i32) -> Result<Vec<Lesson>, DbErr> {
        let entities = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::CourseId.eq(course_id))
            .order_by_asc(entity::lesson::Column::OrderIndex)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lesson::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Lesson>, DbErr> {
        let entity = entity::prelude::Lesson::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Lesson::from_entity))
    }

    /// Finds a lesson together with its parent course.
    ///
    /// # Returns
    /// - `Ok(Some(LessonWithCourse))` - Lesson and course found
    /// - `Ok(None)` - No lesson with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_course(&self, id: i32) -> Result<Option<LessonWithCourse>, DbErr> {
        let result = entity::prelude::Lesson::find_by_id(id)
            .find_also_related(entity::prelude::Course)
            .one(self.db)
            .await?;

        // The foreign key cascades deletes, so a lesson always has its course
        Ok(result.and_then(|(lesson, course)| {
            course.map(|course| LessonWithCourse {
                lesson: Lesson::from_entity(lesson),
                course: Course::from_entity(course),
            })
        }))
    }

    /// Counts the lessons that belong to any of the given courses.
    pub async fn count_by_course_ids(&self, course_ids: &[i32]) -> Result<u64, DbErr> {
        if course_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::CourseId.is_in(course_ids.to_vec()))
            .count(self.db)
            .await
    }
}
