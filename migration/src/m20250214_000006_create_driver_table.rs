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
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(string(Driver::DriverId).primary_key())
                    .col(string_uniq(Driver::UserId))
                    .col(string(Driver::VehicleInfo))
                    .col(string(Driver::LicenseNumber))
                    .col(text(Driver::Status))
                    .col(timestamp_with_time_zone(Driver::CreatedAt))
                    .col(timestamp_with_time_zone(Driver::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_user_id")
                            .from(Driver::Table, Driver::UserId)
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
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    DriverId,
    UserId,
    VehicleInfo,
    LicenseNumber,
    Status,
    CreatedAt,
    UpdatedAt,
}
