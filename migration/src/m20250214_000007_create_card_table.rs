use sea_orm_migration::{prelude::*, schema::*};

use super::m20250214_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(string(Card::CardId).primary_key())
                    .col(string(Card::UserId))
                    .col(string(Card::CardNumber))
                    .col(string_len(Card::ExpiryDate, 5))
                    .col(string(Card::Cvv))
                    .col(timestamp_with_time_zone(Card::CreatedAt))
                    .col(timestamp_with_time_zone(Card::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_user_id")
                            .from(Card::Table, Card::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    CardId,
    UserId,
    CardNumber,
    ExpiryDate,
    Cvv,
    CreatedAt,
    UpdatedAt,
}
