//! Study group data repository.
//!
//! `member_count` is only modified through the conditional updates in this module.
//! Admission increments it with a single `UPDATE ... WHERE member_count < max_members`
//! so two concurrent joins can never both take the last seat.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::group::{CreateGroupParam, StudyGroup};

pub struct StudyGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudyGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new study group.
    ///
    /// # Arguments
    /// - `param` - Name, description, course and capacity of the group
    /// - `member_count` - Initial member count, matching the membership rows the
    ///   caller inserts in the same transaction
    ///
    /// # Returns
    /// - `Ok(StudyGroup)` - The created group
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: &CreateGroupParam,
        member_count: i32,
    ) -> Result<StudyGroup, DbErr> {
        let entity = entity::study_group::ActiveModel {
            name: ActiveValue::Set(param.name.clone()),
            description: ActiveValue::Set(param.description.clone()),
            max_members: ActiveValue::Set(param.max_members),
            member_count: ActiveValue::Set(member_count),
            course_id: ActiveValue::Set(param.course_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StudyGroup::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<StudyGroup>, DbErr> {
        let entity = entity::prelude::StudyGroup::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(StudyGroup::from_entity))
    }

    /// Gets all groups, newest first.
    pub async fn get_all(&self) -> Result<Vec<StudyGroup>, DbErr> {
        let entities = entity::prelude::StudyGroup::find()
            .order_by_desc(entity::study_group::Column::CreatedAt)
            .order_by_desc(entity::study_group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StudyGroup::from_entity).collect())
    }

    /// Gets the groups with the given IDs, newest first.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<StudyGroup>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::StudyGroup::find()
            .filter(entity::study_group::Column::Id.is_in(ids.to_vec()))
            .order_by_desc(entity::study_group::Column::CreatedAt)
            .order_by_desc(entity::study_group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StudyGroup::from_entity).collect())
    }

    /// Takes one seat in the group if one is free.
    ///
    /// Runs `UPDATE study_group SET member_count = member_count + 1
    /// WHERE id = ? AND member_count < max_members` as one statement.
    ///
    /// # Returns
    /// - `Ok(true)` - A seat was taken
    /// - `Ok(false)` - The group is full or does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn try_increment_member_count(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudyGroup::update_many()
            .col_expr(
                entity::study_group::Column::MemberCount,
                Expr::col(entity::study_group::Column::MemberCount).add(1),
            )
            .filter(entity::study_group::Column::Id.eq(id))
            .filter(
                Expr::col(entity::study_group::Column::MemberCount)
                    .lt(Expr::col(entity::study_group::Column::MaxMembers)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Releases one seat in the group.
    ///
    /// # Returns
    /// - `Ok(true)` - A seat was released
    /// - `Ok(false)` - The count was already zero or the group does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn decrement_member_count(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudyGroup::update_many()
            .col_expr(
                entity::study_group::Column::MemberCount,
                Expr::col(entity::study_group::Column::MemberCount).sub(1),
            )
            .filter(entity::study_group::Column::Id.eq(id))
            .filter(entity::study_group::Column::MemberCount.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
