use crate::server::{data::enrollment::EnrollmentRepository, model::course::CreateEnrollmentParam};
use chrono::Duration;
use entity::enrollment::EnrollmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update_progress;
