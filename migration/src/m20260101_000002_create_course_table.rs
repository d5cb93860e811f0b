use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Title))
                    .col(text(Course::Description))
                    .col(string(Course::Category))
                    .col(string_len(Course::Level, 16).default("BEGINNER"))
                    .col(integer(Course::Duration).default(0))
                    .col(string_null(Course::Emoji))
                    .col(double(Course::Rating).default(0.0))
                    .col(integer(Course::Students).default(0))
                    .col(boolean(Course::Published).default(false))
                    .col(
                        timestamp_with_time_zone(Course::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_published_created_at")
                    .table(Course::Table)
                    .col(Course::Published)
                    .col(Course::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Title,
    Description,
    Category,
    Level,
    Duration,
    Emoji,
    Rating,
    Students,
    Published,
    CreatedAt,
}
