//! Database repository layer for seeding.
//!
//! Repositories here borrow the connection explicitly and translate SeaORM errors into
//! `SeedError` variants that name the table involved.

pub mod fixture;

#[cfg(test)]
mod test;
