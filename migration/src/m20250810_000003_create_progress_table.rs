use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250810_000001_create_users_table::User;

const UNIQUE_INDEX_NAME: &str = "progress_user_id_content_kind_unique_index";

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
                    .col(uuid(Progress::Id).primary_key())
                    .col(uuid(Progress::UserId))
                    .col(string(Progress::ContentKind))
                    .col(integer(Progress::CompletedCount).default(0))
                    .col(
                        timestamp_with_time_zone(Progress::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-progress-user_id")
                            .from(Progress::Table, Progress::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_INDEX_NAME)
                    .table(Progress::Table)
                    .col(Progress::UserId)
                    .col(Progress::ContentKind)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(UNIQUE_INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Progress::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Progress {
    Table,
    Id,
    UserId,
    ContentKind,
    CompletedCount,
    UpdatedAt,
}
