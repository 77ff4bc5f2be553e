use crate::seeder::{
    data::fixture::{rows_per_insert, FixtureRepository},
    error::seed::SeedError,
    generator::FixtureGenerator,
    model::{counts::SeedCounts, kind::EntityKind},
};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use sea_orm::{DbErr, EntityTrait, Iterable, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod clear_all;
mod count;
mod insert_all;
mod insert_batch;
