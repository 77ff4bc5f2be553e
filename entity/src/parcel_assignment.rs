use super::sea_orm_active_enums::AssignmentStatus;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parcel_assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub assignment_id: String,
    pub parcel_id: String,
    pub driver_id: String,
    pub assigned_at: DateTimeUtc,
    pub status: AssignmentStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parcel::Entity",
        from = "Column::ParcelId",
        to = "super::parcel::Column::ParcelId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Parcel,
    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to = "super::driver::Column::DriverId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Driver,
}

impl Related<super::parcel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parcel.def()
    }
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
