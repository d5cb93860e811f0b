//! Group member factory for creating membership rows in tests.
//!
//! Inserting a membership through the factory does not touch the group's member counter.

use chrono::Utc;
use entity::group_member::GroupRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test group memberships.
pub struct GroupMemberFactory<'a> {
    db: &'a DatabaseConnection,
    group_id: i32,
    user_id: i32,
    role: GroupRole,
}

impl<'a> GroupMemberFactory<'a> {
    /// Creates a new GroupMemberFactory with role `Member`.
    pub fn new(db: &'a DatabaseConnection, group_id: i32, user_id: i32) -> Self {
        Self {
            db,
            group_id,
            user_id,
            role: GroupRole::Member,
        }
    }

    pub fn role(mut self, role: GroupRole) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the membership into the database.
    pub async fn build(self) -> Result<entity::group_member::Model, DbErr> {
        entity::group_member::ActiveModel {
            group_id: ActiveValue::Set(self.group_id),
            user_id: ActiveValue::Set(self.user_id),
            role: ActiveValue::Set(self.role),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Adds a user to a group as a MEMBER.
pub async fn create_group_member(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
) -> Result<entity::group_member::Model, DbErr> {
    GroupMemberFactory::new(db, group_id, user_id).build().await
}
