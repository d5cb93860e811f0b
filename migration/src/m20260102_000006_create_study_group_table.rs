use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyGroup::Id))
                    .col(string(StudyGroup::Name))
                    .col(string_null(StudyGroup::Description))
                    .col(integer(StudyGroup::MaxMembers).default(10))
                    .col(integer(StudyGroup::MemberCount).default(0))
                    .col(integer_null(StudyGroup::CourseId))
                    .col(
                        timestamp_with_time_zone(StudyGroup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .check(
                        Expr::col(StudyGroup::MemberCount)
                            .lte(Expr::col(StudyGroup::MaxMembers)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_group_course_id")
                            .from(StudyGroup::Table, StudyGroup::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudyGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyGroup {
    Table,
    Id,
    Name,
    Description,
    MaxMembers,
    MemberCount,
    CourseId,
    CreatedAt,
}
