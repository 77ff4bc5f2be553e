use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::UserId).primary_key())
                    .col(string(User::Name))
                    .col(string(User::Email))
                    .col(string(User::PhoneNumber))
                    .col(string(User::PasswordHash))
                    .col(string_null(User::DefaultLocationId))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    UserId,
    Name,
    Email,
    PhoneNumber,
    PasswordHash,
    DefaultLocationId,
    CreatedAt,
    UpdatedAt,
}
