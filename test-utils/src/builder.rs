use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Location, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Location)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement, including foreign keys declared on the entity's
    /// relations, using SQLite backend syntax. Tables should be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables a parcel needs: User, Location, Locker and Parcel.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_parcel_tables(self) -> Self {
        self.with_table(User)
            .with_table(Location)
            .with_table(Locker)
            .with_table(Parcel)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Use this when testing full seed runs or teardown across all tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_seed_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_seed_tables(self) -> Self {
        self.with_parcel_tables()
            .with_table(Item)
            .with_table(Merchant)
            .with_table(Driver)
            .with_table(Card)
            .with_table(WalletTransaction)
            .with_table(DeliveryUpdate)
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(ParcelAssignment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
