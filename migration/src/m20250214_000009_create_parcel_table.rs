use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250214_000001_create_user_table::User, m20250214_000003_create_locker_table::Locker,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parcel::Table)
                    .if_not_exists()
                    .col(string(Parcel::ParcelId).primary_key())
                    .col(string(Parcel::SenderId))
                    .col(string(Parcel::ReceiverId))
                    .col(string(Parcel::PickupLockerId))
                    .col(string(Parcel::DestinationLockerId))
                    .col(double(Parcel::Weight))
                    .col(text(Parcel::Type))
                    .col(boolean(Parcel::InsurancePackage))
                    .col(double(Parcel::ParcelValue))
                    .col(double(Parcel::InsuranceAmount))
                    .col(string_uniq(Parcel::TrackingId))
                    .col(text(Parcel::Status))
                    .col(timestamp_with_time_zone(Parcel::CreatedAt))
                    .col(timestamp_with_time_zone(Parcel::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parcel_sender_id")
                            .from(Parcel::Table, Parcel::SenderId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parcel_receiver_id")
                            .from(Parcel::Table, Parcel::ReceiverId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parcel_pickup_locker_id")
                            .from(Parcel::Table, Parcel::PickupLockerId)
                            .to(Locker::Table, Locker::LockerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parcel_destination_locker_id")
                            .from(Parcel::Table, Parcel::DestinationLockerId)
                            .to(Locker::Table, Locker::LockerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Parcel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Parcel {
    Table,
    ParcelId,
    SenderId,
    ReceiverId,
    PickupLockerId,
    DestinationLockerId,
    Weight,
    Type,
    InsurancePackage,
    ParcelValue,
    InsuranceAmount,
    TrackingId,
    Status,
    CreatedAt,
    UpdatedAt,
}
