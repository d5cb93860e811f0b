use crate::server::{
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository, lesson::LessonRepository,
        study_group::StudyGroupRepository, user::UserRepository,
    },
    error::AppError,
    service::seed::{SeedService, DEMO_EMAIL, DEMO_PASSWORD},
    util::password::verify_password,
};
use test_utils::{builder::TestBuilder, factory};
