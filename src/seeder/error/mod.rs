//! Error types for the seeder.
//!
//! `AppError` is the top-level error that reaches `main`. Any variant arriving there is
//! fatal: it is logged, the database connection is released and the process exits
//! with a non-zero status.

pub mod config;
pub mod seed;

use thiserror::Error;

use crate::seeder::error::{config::ConfigError, seed::SeedError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Generation, teardown or insertion failed during a seed run.
    #[error(transparent)]
    SeedErr(#[from] SeedError),

    /// Database error from SeaORM while connecting or running migrations.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// The global logger could not be installed.
    ///
    /// # Fields
    /// - Message from the logger initialization failure
    #[error("Failed to initialize logger: {0}")]
    LoggerErr(String),
}
