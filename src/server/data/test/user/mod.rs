use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
