use thiserror::Error;

use crate::seeder::model::kind::EntityKind;

/// Failures of a seed run. None of them are retried.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Deleting the existing rows of a table failed.
    ///
    /// Remaining tables are left as they are; the run is aborted.
    #[error("Failed to clear table {kind}: {source}")]
    Teardown {
        kind: EntityKind,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Bulk-inserting a generated batch failed, e.g. on a constraint violation
    /// or a lost connection.
    #[error("Failed to insert {kind} batch: {source}")]
    Insert {
        kind: EntityKind,
        #[source]
        source: sea_orm::DbErr,
    },

    /// A row needs a reference to a parent batch that was configured empty.
    ///
    /// Raised during generation, before any table is touched.
    #[error("Cannot generate {child} rows: no {parent} rows to reference")]
    EmptyPool {
        child: EntityKind,
        parent: EntityKind,
    },

    /// More merchants or drivers were requested than there are users to wrap.
    #[error("Cannot draw {requested} distinct users for {kind}: only {available} users exist")]
    SubsetTooLarge {
        kind: EntityKind,
        requested: usize,
        available: usize,
    },
}
