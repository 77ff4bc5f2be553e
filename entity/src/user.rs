use sea_orm::entity::prelude::*;

/// Platform account. Merchants and drivers wrap a subset of users.
///
/// `default_location_id` is a plain column without a constraint; locations
/// themselves reference their owning user.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub default_location_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
