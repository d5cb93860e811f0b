pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_course_table;
mod m20260101_000003_create_lesson_table;
mod m20260101_000004_create_enrollment_table;
mod m20260101_000005_create_progress_table;
mod m20260102_000006_create_study_group_table;
mod m20260102_000007_create_group_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_course_table::Migration),
            Box::new(m20260101_000003_create_lesson_table::Migration),
            Box::new(m20260101_000004_create_enrollment_table::Migration),
            Box::new(m20260101_000005_create_progress_table::Migration),
            Box::new(m20260102_000006_create_study_group_table::Migration),
            Box::new(m20260102_000007_create_group_member_table::Migration),
        ]
    }
}
