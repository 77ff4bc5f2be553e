//! Fixture data repository for bulk teardown and bulk insertion.
//!
//! This module provides the `FixtureRepository`, the seeder's only path to the database.
//! It deletes whole tables in reverse dependency order and writes each generated batch
//! with a single multi-row insert.

use dioxus_logger::tracing;
use entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Iterable,
    ModelTrait, PaginatorTrait,
};

use crate::seeder::{
    error::seed::SeedError,
    model::{fixture::FixtureSet, kind::EntityKind, report::SeedReport},
};

/// Upper bound on bind parameters in one insert statement.
///
/// Stays below SQLite's default `SQLITE_MAX_VARIABLE_NUMBER` (32766) and Postgres' 65535.
const MAX_BIND_PARAMETERS: usize = 30_000;

/// Rows that fit in one insert statement for a table with `columns` columns.
pub fn rows_per_insert(columns: usize) -> usize {
    (MAX_BIND_PARAMETERS / columns.max(1)).max(1)
}

/// Repository providing table-wide operations for every seeded entity kind.
pub struct FixtureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureRepository<'a> {
    /// Creates a new FixtureRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FixtureRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes every row of one table.
    ///
    /// # Arguments
    /// - `kind` - Table to clear
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(SeedError::Teardown)` - Database error, e.g. rows still referenced by a child table
    pub async fn clear_table(&self, kind: EntityKind) -> Result<u64, SeedError> {
        let result = match kind {
            EntityKind::User => User::delete_many().exec(self.db).await,
            EntityKind::Location => Location::delete_many().exec(self.db).await,
            EntityKind::Locker => Locker::delete_many().exec(self.db).await,
            EntityKind::Item => Item::delete_many().exec(self.db).await,
            EntityKind::Merchant => Merchant::delete_many().exec(self.db).await,
            EntityKind::Driver => Driver::delete_many().exec(self.db).await,
            EntityKind::Card => Card::delete_many().exec(self.db).await,
            EntityKind::WalletTransaction => WalletTransaction::delete_many().exec(self.db).await,
            EntityKind::Parcel => Parcel::delete_many().exec(self.db).await,
            EntityKind::DeliveryUpdate => DeliveryUpdate::delete_many().exec(self.db).await,
            EntityKind::Order => Order::delete_many().exec(self.db).await,
            EntityKind::OrderItem => OrderItem::delete_many().exec(self.db).await,
            EntityKind::ParcelAssignment => ParcelAssignment::delete_many().exec(self.db).await,
        }
        .map_err(|source| SeedError::Teardown { kind, source })?;

        Ok(result.rows_affected)
    }

    /// Deletes every row of every table, children before parents.
    ///
    /// Stops at the first failing table; tables after it keep their rows.
    ///
    /// # Returns
    /// - `Ok(())` - All tables are empty
    /// - `Err(SeedError::Teardown)` - Clearing one of the tables failed
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        for kind in EntityKind::teardown_order() {
            let removed = self.clear_table(kind).await?;
            tracing::debug!("Cleared {} rows from {}", removed, kind);
        }
        Ok(())
    }

    /// Inserts one generated batch with multi-row inserts.
    ///
    /// The batch is split into statements of at most `rows_per_insert` rows so large counts
    /// stay under the database's bind parameter limit. Empty batches are skipped without
    /// touching the database.
    ///
    /// # Arguments
    /// - `kind` - Table the batch belongs to, used for error reporting
    /// - `models` - Entity models to insert
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    /// - `Err(SeedError::Insert)` - Database error such as a constraint violation
    pub async fn insert_batch<M>(&self, kind: EntityKind, models: Vec<M>) -> Result<u64, SeedError>
    where
        M: ModelTrait + IntoActiveModel<<M::Entity as EntityTrait>::ActiveModel>,
        <M::Entity as EntityTrait>::ActiveModel: Send,
    {
        if models.is_empty() {
            return Ok(0);
        }

        let rows = models.len() as u64;
        let chunk_size = rows_per_insert(<M::Entity as EntityTrait>::Column::iter().count());
        let mut remaining: Vec<<M::Entity as EntityTrait>::ActiveModel> = models
            .into_iter()
            .map(|model| model.into_active_model().reset_all())
            .collect();

        while !remaining.is_empty() {
            let rest = remaining.split_off(chunk_size.min(remaining.len()));
            M::Entity::insert_many(remaining)
                .exec(self.db)
                .await
                .map_err(|source| SeedError::Insert { kind, source })?;
            remaining = rest;
        }

        Ok(rows)
    }

    /// Inserts every batch of a fixture set, parents before children.
    ///
    /// # Arguments
    /// - `fixtures` - Generated batches; consumed by the insert
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - Rows inserted per table in insertion order
    /// - `Err(SeedError::Insert)` - The first batch that failed; later batches are not written
    pub async fn insert_all(&self, fixtures: FixtureSet) -> Result<SeedReport, SeedError> {
        let FixtureSet {
            users,
            locations,
            lockers,
            items,
            merchants,
            drivers,
            cards,
            wallet_transactions,
            parcels,
            delivery_updates,
            orders,
            order_items,
            parcel_assignments,
        } = fixtures;

        let mut report = SeedReport::default();
        report.record(
            EntityKind::User,
            self.insert_batch(EntityKind::User, users).await?,
        );
        report.record(
            EntityKind::Location,
            self.insert_batch(EntityKind::Location, locations).await?,
        );
        report.record(
            EntityKind::Locker,
            self.insert_batch(EntityKind::Locker, lockers).await?,
        );
        report.record(
            EntityKind::Item,
            self.insert_batch(EntityKind::Item, items).await?,
        );
        report.record(
            EntityKind::Merchant,
            self.insert_batch(EntityKind::Merchant, merchants).await?,
        );
        report.record(
            EntityKind::Driver,
            self.insert_batch(EntityKind::Driver, drivers).await?,
        );
        report.record(
            EntityKind::Card,
            self.insert_batch(EntityKind::Card, cards).await?,
        );
        report.record(
            EntityKind::WalletTransaction,
            self.insert_batch(EntityKind::WalletTransaction, wallet_transactions)
                .await?,
        );
        report.record(
            EntityKind::Parcel,
            self.insert_batch(EntityKind::Parcel, parcels).await?,
        );
        report.record(
            EntityKind::DeliveryUpdate,
            self.insert_batch(EntityKind::DeliveryUpdate, delivery_updates)
                .await?,
        );
        report.record(
            EntityKind::Order,
            self.insert_batch(EntityKind::Order, orders).await?,
        );
        report.record(
            EntityKind::OrderItem,
            self.insert_batch(EntityKind::OrderItem, order_items).await?,
        );
        report.record(
            EntityKind::ParcelAssignment,
            self.insert_batch(EntityKind::ParcelAssignment, parcel_assignments)
                .await?,
        );

        Ok(report)
    }

    /// Counts the rows currently stored in one table.
    ///
    /// # Arguments
    /// - `kind` - Table to count
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows
    /// - `Err(DbErr)` - Database error during the count query
    pub async fn count(&self, kind: EntityKind) -> Result<u64, DbErr> {
        match kind {
            EntityKind::User => User::find().count(self.db).await,
            EntityKind::Location => Location::find().count(self.db).await,
            EntityKind::Locker => Locker::find().count(self.db).await,
            EntityKind::Item => Item::find().count(self.db).await,
            EntityKind::Merchant => Merchant::find().count(self.db).await,
            EntityKind::Driver => Driver::find().count(self.db).await,
            EntityKind::Card => Card::find().count(self.db).await,
            EntityKind::WalletTransaction => WalletTransaction::find().count(self.db).await,
            EntityKind::Parcel => Parcel::find().count(self.db).await,
            EntityKind::DeliveryUpdate => DeliveryUpdate::find().count(self.db).await,
            EntityKind::Order => Order::find().count(self.db).await,
            EntityKind::OrderItem => OrderItem::find().count(self.db).await,
            EntityKind::ParcelAssignment => ParcelAssignment::find().count(self.db).await,
        }
    }
}
