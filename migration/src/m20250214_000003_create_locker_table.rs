use sea_orm_migration::{prelude::*, schema::*};

use super::m20250214_000002_create_location_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locker::Table)
                    .if_not_exists()
                    .col(string(Locker::LockerId).primary_key())
                    .col(string(Locker::LocationId))
                    .col(string(Locker::LockerCode))
                    .col(boolean(Locker::IsAvailable))
                    .col(timestamp_with_time_zone(Locker::CreatedAt))
                    .col(timestamp_with_time_zone(Locker::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_locker_location_id")
                            .from(Locker::Table, Locker::LocationId)
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
            .drop_table(Table::drop().table(Locker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Locker {
    Table,
    LockerId,
    LocationId,
    LockerCode,
    IsAvailable,
    CreatedAt,
    UpdatedAt,
}
