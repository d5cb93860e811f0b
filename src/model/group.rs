use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGroupDto {
    pub name: String,
    pub description: Option<String>,
    pub course_id: Option<i32>,
    /// Defaults to 10 when omitted.
    pub max_members: Option<i32>,
}

/// Public profile of a group member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberUserDto {
    pub id: i32,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupMemberDto {
    pub group_id: i32,
    pub user_id: i32,
    /// One of `ADMIN`, `MEMBER`.
    pub role: String,
    pub joined_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<MemberUserDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub max_members: i32,
    pub member_count: i32,
    pub course_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub members: Vec<GroupMemberDto>,
}
