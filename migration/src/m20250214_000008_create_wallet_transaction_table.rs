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
                    .table(WalletTransaction::Table)
                    .if_not_exists()
                    .col(string(WalletTransaction::TransactionId).primary_key())
                    .col(string(WalletTransaction::UserId))
                    .col(double(WalletTransaction::Amount))
                    .col(text(WalletTransaction::TransactionType))
                    .col(timestamp_with_time_zone(
                        WalletTransaction::TransactionDate,
                    ))
                    .col(text(WalletTransaction::PaymentMethod))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wallet_transaction_user_id")
                            .from(WalletTransaction::Table, WalletTransaction::UserId)
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
            .drop_table(Table::drop().table(WalletTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WalletTransaction {
    Table,
    TransactionId,
    UserId,
    Amount,
    TransactionType,
    TransactionDate,
    PaymentMethod,
}
