use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Failures of the study group membership rules.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GroupError {
    /// The referenced group does not exist.
    #[error("Group not found")]
    NotFound,

    /// The group already holds `max_members` members.
    #[error("Group is full")]
    CapacityExceeded,

    /// The caller is already a member of the group.
    #[error("Already a member")]
    AlreadyMember,

    /// Leave was requested for a membership that does not exist.
    #[error("Membership not found")]
    MembershipNotFound,
}

/// # Returns
/// - 403 Forbidden - For `CapacityExceeded` and `AlreadyMember`
/// - 404 Not Found - For `NotFound` and `MembershipNotFound`
impl IntoResponse for GroupError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound | Self::MembershipNotFound => StatusCode::NOT_FOUND,
            Self::CapacityExceeded | Self::AlreadyMember => StatusCode::FORBIDDEN,
        };

        error_response(status, self.to_string())
    }
}
