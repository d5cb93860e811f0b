//! Study group domain models and parameters.
//!
//! A study group has a fixed capacity (`max_members`) and a denormalized
//! `member_count` that always equals the number of membership rows.

use chrono::{DateTime, Utc};
use entity::group_member::GroupRole;
use sea_orm::ActiveEnum;

use crate::{
    model::group::{CreateGroupDto, GroupDto, GroupMemberDto},
    server::model::user::User,
};

/// Capacity used when a group is created without an explicit `max_members`.
pub const DEFAULT_MAX_MEMBERS: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct StudyGroup {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub max_members: i32,
    pub member_count: i32,
    /// Course the group studies, if any.
    pub course_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl StudyGroup {
    pub fn from_entity(entity: entity::study_group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            max_members: entity.max_members,
            member_count: entity.member_count,
            course_id: entity.course_id,
            created_at: entity.created_at,
        }
    }
}

/// Membership of a user in a group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub group_id: i32,
    pub user_id: i32,
    pub role: GroupRole,
    pub joined_at: DateTime<Utc>,
    /// The member's account, when loaded alongside the membership.
    pub user: Option<User>,
}

impl GroupMember {
    pub fn into_dto(self) -> GroupMemberDto {
        GroupMemberDto {
            role: self.role.to_value(),
            group_id: self.group_id,
            user_id: self.user_id,
            joined_at: self.joined_at,
            user: self.user.map(User::into_member_dto),
        }
    }

    pub fn from_entity(
        entity: entity::group_member::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        Self {
            group_id: entity.group_id,
            user_id: entity.user_id,
            role: entity.role,
            joined_at: entity.joined_at,
            user: user.map(User::from_entity),
        }
    }
}

/// A group with its members ordered by join time.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupWithMembers {
    pub group: StudyGroup,
    pub members: Vec<GroupMember>,
}

impl GroupWithMembers {
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.group.id,
            name: self.group.name,
            description: self.group.description,
            max_members: self.group.max_members,
            member_count: self.group.member_count,
            course_id: self.group.course_id,
            created_at: self.group.created_at,
            members: self.members.into_iter().map(GroupMember::into_dto).collect(),
        }
    }
}

/// Parameters for creating a study group.
#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub name: String,
    pub description: Option<String>,
    pub course_id: Option<i32>,
    pub max_members: i32,
}

impl From<CreateGroupDto> for CreateGroupParam {
    fn from(dto: CreateGroupDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            course_id: dto.course_id,
            max_members: dto.max_members.unwrap_or(DEFAULT_MAX_MEMBERS),
        }
    }
}
