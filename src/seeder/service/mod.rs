//! Service layer orchestrating a seed run.

pub mod seed;
