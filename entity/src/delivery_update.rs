use super::sea_orm_active_enums::ParcelStatus;
use sea_orm::entity::prelude::*;

/// Status snapshot of a parcel. Rows carry no sequence number.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "delivery_update")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub delivery_update_id: String,
    pub parcel_id: String,
    pub status: ParcelStatus,
    pub updated_at: DateTimeUtc,
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
}

impl Related<super::parcel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parcel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
