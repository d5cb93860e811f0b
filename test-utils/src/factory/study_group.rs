//! Study group factory for creating test group entities.
//!
//! The factory inserts the group row only. Use `helpers::create_group_with_owner` when the
//! test needs the owner's membership row as well.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test study groups.
pub struct StudyGroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    max_members: i32,
    member_count: i32,
    course_id: Option<i32>,
}

impl<'a> StudyGroupFactory<'a> {
    /// Creates a new StudyGroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Group {id}"`
    /// - max_members: `10`
    /// - member_count: `0`
    /// - course_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Group {}", id),
            description: None,
            max_members: 10,
            member_count: 0,
            course_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn max_members(mut self, max_members: i32) -> Self {
        self.max_members = max_members;
        self
    }

    /// Sets the stored member counter. Callers are responsible for inserting the
    /// matching membership rows.
    pub fn member_count(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }

    pub fn course_id(mut self, course_id: i32) -> Self {
        self.course_id = Some(course_id);
        self
    }

    /// Builds and inserts the study group entity into the database.
    pub async fn build(self) -> Result<entity::study_group::Model, DbErr> {
        entity::study_group::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            max_members: ActiveValue::Set(self.max_members),
            member_count: ActiveValue::Set(self.member_count),
            course_id: ActiveValue::Set(self.course_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty study group with default values.
pub async fn create_study_group(
    db: &DatabaseConnection,
) -> Result<entity::study_group::Model, DbErr> {
    StudyGroupFactory::new(db).build().await
}
