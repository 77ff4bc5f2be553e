pub use sea_orm_migration::prelude::*;

mod m20250214_000001_create_user_table;
mod m20250214_000002_create_location_table;
mod m20250214_000003_create_locker_table;
mod m20250214_000004_create_item_table;
mod m20250214_000005_create_merchant_table;
mod m20250214_000006_create_driver_table;
mod m20250214_000007_create_card_table;
mod m20250214_000008_create_wallet_transaction_table;
mod m20250214_000009_create_parcel_table;
mod m20250214_000010_create_delivery_update_table;
mod m20250214_000011_create_order_table;
mod m20250214_000012_create_order_item_table;
mod m20250214_000013_create_parcel_assignment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250214_000001_create_user_table::Migration),
            Box::new(m20250214_000002_create_location_table::Migration),
            Box::new(m20250214_000003_create_locker_table::Migration),
            Box::new(m20250214_000004_create_item_table::Migration),
            Box::new(m20250214_000005_create_merchant_table::Migration),
            Box::new(m20250214_000006_create_driver_table::Migration),
            Box::new(m20250214_000007_create_card_table::Migration),
            Box::new(m20250214_000008_create_wallet_transaction_table::Migration),
            Box::new(m20250214_000009_create_parcel_table::Migration),
            Box::new(m20250214_000010_create_delivery_update_table::Migration),
            Box::new(m20250214_000011_create_order_table::Migration),
            Box::new(m20250214_000012_create_order_item_table::Migration),
            Box::new(m20250214_000013_create_parcel_assignment_table::Migration),
        ]
    }
}
