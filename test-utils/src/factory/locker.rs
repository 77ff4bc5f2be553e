//! Locker factory for creating test locker entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lockers with customizable fields.
pub struct LockerFactory<'a> {
    db: &'a DatabaseConnection,
    locker_id: String,
    location_id: String,
    locker_code: String,
    is_available: bool,
}

impl<'a> LockerFactory<'a> {
    /// Creates a new LockerFactory with default values.
    ///
    /// Defaults:
    /// - locker_id: `"locker-{id}"`
    /// - locker_code: `"L{id:05}"`
    /// - is_available: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `location_id` - Location the locker is installed at
    pub fn new(db: &'a DatabaseConnection, location_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            locker_id: format!("locker-{}", id),
            location_id: location_id.into(),
            locker_code: format!("L{:05}", id % 100_000),
            is_available: true,
        }
    }

    /// Sets whether the locker is available.
    pub fn is_available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Builds and inserts the locker entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::locker::Model)` - Created locker entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::locker::Model, DbErr> {
        let now = Utc::now();
        entity::locker::ActiveModel {
            locker_id: ActiveValue::Set(self.locker_id),
            location_id: ActiveValue::Set(self.location_id),
            locker_code: ActiveValue::Set(self.locker_code),
            is_available: ActiveValue::Set(self.is_available),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available locker at the given location.
pub async fn create_locker(
    db: &DatabaseConnection,
    location_id: impl Into<String>,
) -> Result<entity::locker::Model, DbErr> {
    LockerFactory::new(db, location_id).build().await
}
