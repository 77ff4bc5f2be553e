use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(string(Item::ItemId).primary_key())
                    .col(string(Item::Name))
                    .col(text(Item::Description))
                    .col(double(Item::Price))
                    .col(string(Item::Size))
                    .col(double(Item::Weight))
                    .col(timestamp_with_time_zone(Item::CreatedAt))
                    .col(timestamp_with_time_zone(Item::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    ItemId,
    Name,
    Description,
    Price,
    Size,
    Weight,
    CreatedAt,
    UpdatedAt,
}
