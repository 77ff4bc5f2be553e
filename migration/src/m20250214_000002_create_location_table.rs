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
                    .table(Location::Table)
                    .if_not_exists()
                    .col(string(Location::LocationId).primary_key())
                    .col(string(Location::Address))
                    .col(double(Location::Latitude))
                    .col(double(Location::Longitude))
                    .col(string_null(Location::UserId))
                    .col(timestamp_with_time_zone(Location::CreatedAt))
                    .col(timestamp_with_time_zone(Location::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_user_id")
                            .from(Location::Table, Location::UserId)
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
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    LocationId,
    Address,
    Latitude,
    Longitude,
    UserId,
    CreatedAt,
    UpdatedAt,
}
