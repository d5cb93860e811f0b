use crate::server::{
    error::{group::GroupError, AppError},
    model::group::CreateGroupParam,
    service::group::GroupService,
};
use entity::group_member::GroupRole;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod leave;
mod read;

fn group_param(name: &str, max_members: i32) -> CreateGroupParam {
    CreateGroupParam {
        name: name.to_string(),
        description: None,
        course_id: None,
        max_members,
    }
}
