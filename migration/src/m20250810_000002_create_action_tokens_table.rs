use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250810_000001_create_users_table::User;

const USER_KIND_INDEX_NAME: &str = "action_tokens_user_id_kind_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActionToken::Table)
                    .if_not_exists()
                    .col(uuid(ActionToken::Id).primary_key())
                    .col(string_uniq(ActionToken::Secret))
                    .col(uuid(ActionToken::UserId))
                    .col(string(ActionToken::Kind))
                    .col(string_null(ActionToken::Code))
                    .col(timestamp_with_time_zone(ActionToken::ExpiresAt))
                    .col(boolean(ActionToken::Used).default(false))
                    .col(
                        timestamp_with_time_zone(ActionToken::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-action_tokens-user_id")
                            .from(ActionToken::Table, ActionToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(USER_KIND_INDEX_NAME)
                    .table(ActionToken::Table)
                    .col(ActionToken::UserId)
                    .col(ActionToken::Kind)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(USER_KIND_INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActionToken::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ActionToken {
    #[sea_orm(iden = "action_tokens")]
    Table,
    Id,
    Secret,
    UserId,
    Kind,
    Code,
    ExpiresAt,
    Used,
    CreatedAt,
}
