use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250214_000001_create_user_table::User, m20250214_000002_create_location_table::Location,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Merchant::Table)
                    .if_not_exists()
                    .col(string(Merchant::MerchantId).primary_key())
                    .col(string_uniq(Merchant::UserId))
                    .col(string(Merchant::BusinessName))
                    .col(string(Merchant::ContactPerson))
                    .col(string(Merchant::ContactEmail))
                    .col(string(Merchant::ContactPhone))
                    .col(string(Merchant::AddressId))
                    .col(timestamp_with_time_zone(Merchant::CreatedAt))
                    .col(timestamp_with_time_zone(Merchant::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_merchant_user_id")
                            .from(Merchant::Table, Merchant::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_merchant_address_id")
                            .from(Merchant::Table, Merchant::AddressId)
                            .to(Location::Table, Location::LocationId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Merchant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Merchant {
    Table,
    MerchantId,
    UserId,
    BusinessName,
    ContactPerson,
    ContactEmail,
    ContactPhone,
    AddressId,
    CreatedAt,
    UpdatedAt,
}
