//! Models describing what a seed run produces.
//!
//! These types sit between the generator and the data layer: `EntityKind` names the
//! tables and their dependency order, `SeedCounts` sizes the batches, `FixtureSet`
//! carries the generated rows and `SeedReport` records what was written.

pub mod counts;
pub mod fixture;
pub mod kind;
pub mod report;
