use dioxus_logger::tracing::{self, Level};

use crate::seeder::{config::Config, error::AppError};

/// Installs the global tracing subscriber at the given level.
pub fn init_logger(level: Level) -> Result<(), AppError> {
    dioxus_logger::init(level).map_err(|e| AppError::LoggerErr(e.to_string()))
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so every table the seeder writes exists.
///
/// # Arguments
/// - `config` - Seeder configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    tracing::debug!("Database migrations applied");

    Ok(db)
}
