use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250214_000001_create_user_table::User, m20250214_000005_create_merchant_table::Merchant,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(string(Order::OrderId).primary_key())
                    .col(string(Order::UserId))
                    .col(string_null(Order::MerchantId))
                    .col(timestamp_with_time_zone(Order::OrderDate))
                    .col(double(Order::TotalCost))
                    .col(double(Order::DeliveryCost))
                    .col(double(Order::InsuranceAmount))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user_id")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_merchant_id")
                            .from(Order::Table, Order::MerchantId)
                            .to(Merchant::Table, Merchant::MerchantId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    OrderId,
    UserId,
    MerchantId,
    OrderDate,
    TotalCost,
    DeliveryCost,
    InsuranceAmount,
}
