use sea_orm_migration::{prelude::*, schema::*};

use super::m20250214_000009_create_parcel_table::Parcel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeliveryUpdate::Table)
                    .if_not_exists()
                    .col(string(DeliveryUpdate::DeliveryUpdateId).primary_key())
                    .col(string(DeliveryUpdate::ParcelId))
                    .col(text(DeliveryUpdate::Status))
                    .col(timestamp_with_time_zone(DeliveryUpdate::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_update_parcel_id")
                            .from(DeliveryUpdate::Table, DeliveryUpdate::ParcelId)
                            .to(Parcel::Table, Parcel::ParcelId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeliveryUpdate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeliveryUpdate {
    Table,
    DeliveryUpdateId,
    ParcelId,
    Status,
    UpdatedAt,
}
