use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User, m20260101_000003_create_lesson_table::Lesson,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Progress::Table)
                    .if_not_exists()
                    .col(integer(Progress::UserId))
                    .col(integer(Progress::LessonId))
                    .col(boolean(Progress::Completed).default(false))
                    .col(timestamp_with_time_zone_null(Progress::CompletedAt))
                    .col(
                        timestamp_with_time_zone(Progress::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Progress::UserId)
                            .col(Progress::LessonId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_progress_user_id")
                            .from(Progress::Table, Progress::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_progress_lesson_id")
                            .from(Progress::Table, Progress::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Progress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Progress {
    Table,
    UserId,
    LessonId,
    Completed,
    CompletedAt,
    UpdatedAt,
}
