//! Study group membership rules.
//!
//! Every write runs in a single transaction. Admission takes a seat with a conditional
//! counter update before inserting the membership row, so a full group rejects the
//! join without touching the membership table and a failed join rolls the seat back.

use std::collections::HashMap;

use entity::group_member::GroupRole;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        course::CourseRepository, group_member::GroupMemberRepository,
        study_group::StudyGroupRepository,
    },
    error::{group::GroupError, AppError},
    model::group::{CreateGroupParam, GroupMember, GroupWithMembers, StudyGroup},
    service::course::course_not_found,
    util::db::is_unique_violation,
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every group with its members, newest group first.
    pub async fn get_all(&self) -> Result<Vec<GroupWithMembers>, AppError> {
        let groups = StudyGroupRepository::new(self.db).get_all().await?;

        with_members(self.db, groups).await
    }

    /// Gets one group with its members.
    ///
    /// # Returns
    /// - `Ok(GroupWithMembers)` - Group and members
    /// - `Err(AppError::GroupErr(NotFound))` - No group with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<GroupWithMembers, AppError> {
        let group = StudyGroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(GroupError::NotFound)?;

        let members = GroupMemberRepository::new(self.db)
            .get_by_group_ids_with_user(&[id])
            .await?;

        Ok(GroupWithMembers { group, members })
    }

    /// Gets the groups the user belongs to, with their members.
    pub async fn get_user_groups(&self, user_id: i32) -> Result<Vec<GroupWithMembers>, AppError> {
        let group_ids = GroupMemberRepository::new(self.db)
            .get_group_ids_by_user(user_id)
            .await?;

        let groups = StudyGroupRepository::new(self.db)
            .get_by_ids(&group_ids)
            .await?;

        with_members(self.db, groups).await
    }

    /// Creates a group with the creator as its only member and admin.
    ///
    /// # Returns
    /// - `Ok(GroupWithMembers)` - The new group with one ADMIN member
    /// - `Err(AppError::BadRequest)` - Empty name or `max_members` below 1
    /// - `Err(AppError::NotFound)` - The referenced course does not exist
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn create(
        &self,
        creator_id: i32,
        param: CreateGroupParam,
    ) -> Result<GroupWithMembers, AppError> {
        if param.name.is_empty() {
            return Err(AppError::BadRequest("Group name is required".to_string()));
        }
        if param.max_members < 1 {
            return Err(AppError::BadRequest(
                "max_members must be at least 1".to_string(),
            ));
        }

        if let Some(course_id) = param.course_id {
            if !CourseRepository::new(self.db).exists(course_id).await? {
                return Err(course_not_found(course_id));
            }
        }

        let txn = self.db.begin().await?;

        let group = StudyGroupRepository::new(&txn).create(&param, 1).await?;
        GroupMemberRepository::new(&txn)
            .create(group.id, creator_id, GroupRole::Admin)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} created study group {}", creator_id, group.id);

        self.get_by_id(group.id).await
    }

    /// Adds the user to the group as a MEMBER.
    ///
    /// Checks run in order: the group exists, a seat is free, the user is not
    /// already a member.
    ///
    /// # Returns
    /// - `Ok(GroupMember)` - The new membership
    /// - `Err(AppError::GroupErr(NotFound))` - No group with that ID
    /// - `Err(AppError::GroupErr(CapacityExceeded))` - The group is full
    /// - `Err(AppError::GroupErr(AlreadyMember))` - The user is already a member
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn join(&self, group_id: i32, user_id: i32) -> Result<GroupMember, AppError> {
        let txn = self.db.begin().await?;

        // Taking the seat is the first statement, so the transaction holds the write
        // lock before it reads anything and concurrent joins queue behind it.
        let group_repo = StudyGroupRepository::new(&txn);
        if !group_repo.try_increment_member_count(group_id).await? {
            if group_repo.find_by_id(group_id).await?.is_none() {
                return Err(GroupError::NotFound.into());
            }

            tracing::warn!("User {} rejected from full study group {}", user_id, group_id);
            return Err(GroupError::CapacityExceeded.into());
        }

        let member_repo = GroupMemberRepository::new(&txn);
        if member_repo.exists(group_id, user_id).await? {
            return Err(GroupError::AlreadyMember.into());
        }

        let member = member_repo
            .create(group_id, user_id, GroupRole::Member)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::from(GroupError::AlreadyMember)
                } else {
                    AppError::from(e)
                }
            })?;

        txn.commit().await?;

        Ok(member)
    }

    /// Removes the user's membership and frees their seat.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::GroupErr(MembershipNotFound))` - The user is not a member
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn leave(&self, group_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !GroupMemberRepository::new(&txn)
            .delete(group_id, user_id)
            .await?
        {
            return Err(GroupError::MembershipNotFound.into());
        }

        StudyGroupRepository::new(&txn)
            .decrement_member_count(group_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}

/// Loads the members of each group and pairs them up, keeping the group order.
async fn with_members<C: ConnectionTrait>(
    db: &C,
    groups: Vec<StudyGroup>,
) -> Result<Vec<GroupWithMembers>, AppError> {
    let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();

    let mut members_by_group: HashMap<i32, Vec<GroupMember>> = HashMap::new();
    for member in GroupMemberRepository::new(db)
        .get_by_group_ids_with_user(&group_ids)
        .await?
    {
        members_by_group
            .entry(member.group_id)
            .or_default()
            .push(member);
    }

    Ok(groups
        .into_iter()
        .map(|group| GroupWithMembers {
            members: members_by_group.remove(&group.id).unwrap_or_default(),
            group,
        })
        .collect())
}
