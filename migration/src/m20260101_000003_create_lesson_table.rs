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
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(integer(Lesson::CourseId))
                    .col(string(Lesson::Title))
                    .col(string_null(Lesson::Description))
                    .col(string_len(Lesson::LessonType, 16).default("VIDEO"))
                    .col(text(Lesson::Content))
                    .col(integer(Lesson::Duration).default(0))
                    .col(integer(Lesson::OrderIndex))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_course_id")
                            .from(Lesson::Table, Lesson::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_lesson_course_order_unique")
                            .col(Lesson::CourseId)
                            .col(Lesson::OrderIndex),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    Table,
    Id,
    CourseId,
    Title,
    Description,
    LessonType,
    Content,
    Duration,
    OrderIndex,
}
