//! Group membership data repository.
//!
//! Memberships are keyed by `(group_id, user_id)`, so a user can hold at most one
//! membership per group.

use chrono::Utc;
use entity::group_member::GroupRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::group::GroupMember;

pub struct GroupMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership row.
    ///
    /// # Returns
    /// - `Ok(GroupMember)` - The created membership without its user loaded
    /// - `Err(DbErr)` - Database error, including a unique violation when the user is
    ///   already a member
    pub async fn create(
        &self,
        group_id: i32,
        user_id: i32,
        role: GroupRole,
    ) -> Result<GroupMember, DbErr> {
        let entity = entity::group_member::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(GroupMember::from_entity(entity, None))
    }

    /// Checks whether the user is a member of the group.
    pub async fn exists(&self, group_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::GroupMember::find_by_id((group_id, user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the user's membership in the group.
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly that membership was removed
    /// - `Ok(false)` - The user was not a member
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, group_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GroupMember::delete_by_id((group_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the memberships of the given groups with their users, in join order.
    ///
    /// # Returns
    /// - `Ok(Vec<GroupMember>)` - Memberships with `user` populated
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_group_ids_with_user(
        &self,
        group_ids: &[i32],
    ) -> Result<Vec<GroupMember>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::GroupId.is_in(group_ids.to_vec()))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::group_member::Column::JoinedAt)
            .order_by_asc(entity::group_member::Column::UserId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(member, user)| GroupMember::from_entity(member, user))
            .collect())
    }

    /// Gets the IDs of every group the user belongs to.
    pub async fn get_group_ids_by_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::GroupMember::find()
            .select_only()
            .column(entity::group_member::Column::GroupId)
            .filter(entity::group_member::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
