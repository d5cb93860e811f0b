//! Lesson factory for creating test lesson entities.

use crate::factory::helpers::next_id;
use entity::lesson::LessonType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lessons within a course.
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    title: String,
    order_index: i32,
    duration: i32,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory for the given course.
    ///
    /// Defaults:
    /// - title: `"Lesson {id}"`
    /// - order_index: `{id}`, unique across the test run
    /// - duration: `10`
    pub fn new(db: &'a DatabaseConnection, course_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            course_id,
            title: format!("Lesson {}", id),
            order_index: id as i32,
            duration: 10,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn order_index(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    /// Builds and inserts the lesson entity into the database.
    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            course_id: ActiveValue::Set(self.course_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            lesson_type: ActiveValue::Set(LessonType::Video),
            content: ActiveValue::Set("Video content here".to_string()),
            duration: ActiveValue::Set(self.duration),
            order_index: ActiveValue::Set(self.order_index),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lesson with default values for the given course.
pub async fn create_lesson(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db, course_id).build().await
}
