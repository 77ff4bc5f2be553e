use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250214_000006_create_driver_table::Driver, m20250214_000009_create_parcel_table::Parcel,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParcelAssignment::Table)
                    .if_not_exists()
                    .col(string(ParcelAssignment::AssignmentId).primary_key())
                    .col(string(ParcelAssignment::ParcelId))
                    .col(string(ParcelAssignment::DriverId))
                    .col(timestamp_with_time_zone(ParcelAssignment::AssignedAt))
                    .col(text(ParcelAssignment::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parcel_assignment_parcel_id")
                            .from(ParcelAssignment::Table, ParcelAssignment::ParcelId)
                            .to(Parcel::Table, Parcel::ParcelId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parcel_assignment_driver_id")
                            .from(ParcelAssignment::Table, ParcelAssignment::DriverId)
                            .to(Driver::Table, Driver::DriverId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParcelAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParcelAssignment {
    Table,
    AssignmentId,
    ParcelId,
    DriverId,
    AssignedAt,
    Status,
}
