use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250810_000001_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserActivityStreak::Table)
                    .if_not_exists()
                    .col(uuid(UserActivityStreak::UserId).primary_key())
                    .col(integer(UserActivityStreak::Streak).default(0))
                    .col(date_null(UserActivityStreak::LastActivityDate))
                    .col(
                        timestamp_with_time_zone(UserActivityStreak::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(UserActivityStreak::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_activity_streaks-user_id")
                            .from(UserActivityStreak::Table, UserActivityStreak::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserActivityStreak::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserActivityStreak {
    #[sea_orm(iden = "user_activity_streaks")]
    Table,
    UserId,
    Streak,
    LastActivityDate,
    CreatedAt,
    UpdatedAt,
}
