//! Synthetic fixture seeding for the parcel delivery schema.
//!
//! The seeder wipes every table and refills it with a randomized but referentially
//! consistent dataset in a single pass.
//!
//! # Architecture
//!
//! - **Model Layer** (`model/`) - Entity kinds, batch sizes, generated batches and run reports
//! - **Generator** (`generator/`) - Pure, seeded generation of every batch in dependency order
//! - **Data Layer** (`data/`) - Bulk deletes and inserts against the database
//! - **Service Layer** (`service/`) - Orchestrates generation, teardown and persistence
//! - **Error Layer** (`error/`) - Configuration and seeding error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Logging initialization, database connection and migrations
//!
//! # Run Flow
//!
//! 1. **Generator** builds the complete `FixtureSet` in memory from a seeded RNG
//! 2. **Data** deletes all rows, children before parents
//! 3. **Data** bulk-inserts one batch per table, parents before children
//! 4. **Service** reports the rows written per table

pub mod config;
pub mod data;
pub mod error;
pub mod generator;
pub mod model;
pub mod service;
pub mod startup;
