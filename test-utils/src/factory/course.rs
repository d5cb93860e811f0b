//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::course::CourseLevel;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// Courses are published by default so they show up in the catalog.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    category: String,
    level: CourseLevel,
    duration: i32,
    published: bool,
    created_at: DateTime<Utc>,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Course {id}"`
    /// - category: `"Programming"`
    /// - level: `Beginner`
    /// - duration: `60`
    /// - published: `true`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Course {}", id),
            description: format!("Description for course {}", id),
            category: "Programming".to_string(),
            level: CourseLevel::Beginner,
            duration: 60,
            published: true,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn level(mut self, level: CourseLevel) -> Self {
        self.level = level;
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Overrides the creation timestamp, used to control catalog ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            category: ActiveValue::Set(self.category),
            level: ActiveValue::Set(self.level),
            duration: ActiveValue::Set(self.duration),
            emoji: ActiveValue::Set(None),
            rating: ActiveValue::Set(0.0),
            students: ActiveValue::Set(0),
            published: ActiveValue::Set(self.published),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
