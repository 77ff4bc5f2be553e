mod seeder;

use std::process::ExitCode;

use dioxus_logger::tracing::{self, Level};
use rand::Rng;

use crate::seeder::{config::Config, error::AppError, service::seed::SeedService, startup};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let level = config.as_ref().map_or(Level::INFO, |c| c.log_level);
    if let Err(e) = startup::init_logger(level) {
        eprintln!("{}", e);
    }

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Seeding failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Connects, seeds and releases the connection whether or not seeding succeeded.
async fn run(config: Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config).await?;

    let rng_seed = config.rng_seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!("Seeding database");

    let result = SeedService::new(&db).seed(&config.counts, rng_seed).await;

    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }

    result.map(|_| ())
}
