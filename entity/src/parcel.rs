use super::sea_orm_active_enums::{ParcelStatus, ParcelType};
use sea_orm::entity::prelude::*;

/// A shipment between two users, dropped at one locker and collected at another.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parcel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub parcel_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub pickup_locker_id: String,
    pub destination_locker_id: String,
    pub weight: f64,
    #[sea_orm(column_name = "type")]
    pub parcel_type: ParcelType,
    pub insurance_package: bool,
    pub parcel_value: f64,
    pub insurance_amount: f64,
    pub tracking_id: String,
    pub status: ParcelStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SenderId",
        to = "super::user::Column::UserId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReceiverId",
        to = "super::user::Column::UserId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Receiver,
    #[sea_orm(
        belongs_to = "super::locker::Entity",
        from = "Column::PickupLockerId",
        to = "super::locker::Column::LockerId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PickupLocker,
    #[sea_orm(
        belongs_to = "super::locker::Entity",
        from = "Column::DestinationLockerId",
        to = "super::locker::Column::LockerId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DestinationLocker,
}

impl ActiveModelBehavior for ActiveModel {}
