use std::{fmt::Display, str::FromStr};

use dioxus_logger::tracing::Level;

use crate::seeder::{error::config::ConfigError, model::counts::SeedCounts};

pub struct Config {
    pub database_url: String,

    /// Seed for the fixture RNG. A random seed is drawn when unset.
    pub rng_seed: Option<u64>,
    pub log_level: Level,

    pub counts: SeedCounts,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Only `DATABASE_URL` is required. Every other variable falls back to its default
    /// when unset, but a set value that fails to parse is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SeedCounts::default();

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            rng_seed: parse_optional(&lookup, "SEED_RNG_SEED")?,
            log_level: parse_optional(&lookup, "LOG_LEVEL")?.unwrap_or(Level::INFO),
            counts: SeedCounts {
                users: parse_or(&lookup, "SEED_USERS", defaults.users)?,
                locations: parse_or(&lookup, "SEED_LOCATIONS", defaults.locations)?,
                lockers: parse_or(&lookup, "SEED_LOCKERS", defaults.lockers)?,
                items: parse_or(&lookup, "SEED_ITEMS", defaults.items)?,
                merchants: parse_or(&lookup, "SEED_MERCHANTS", defaults.merchants)?,
                drivers: parse_or(&lookup, "SEED_DRIVERS", defaults.drivers)?,
                cards: parse_or(&lookup, "SEED_CARDS", defaults.cards)?,
                wallet_transactions: parse_or(
                    &lookup,
                    "SEED_WALLET_TRANSACTIONS",
                    defaults.wallet_transactions,
                )?,
                parcels: parse_or(&lookup, "SEED_PARCELS", defaults.parcels)?,
                orders: parse_or(&lookup, "SEED_ORDERS", defaults.orders)?,
            },
        })
    }
}

fn parse_optional<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|err: T::Err| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    reason: err.to_string(),
                    value,
                })
        })
        .transpose()
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    Ok(parse_optional(lookup, name)?.unwrap_or(default))
}
