//! Location factory for creating test location entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with customizable fields.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: String,
    address: String,
    user_id: Option<String>,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - location_id: `"location-{id}"`
    /// - address: `"{id} Test Street"`
    /// - user_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            location_id: format!("location-{}", id),
            address: format!("{} Test Street", id),
            user_id: None,
        }
    }

    /// Sets the owning user.
    pub fn user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the street address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and inserts the location entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::location::Model)` - Created location entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown owning user)
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        let now = Utc::now();
        entity::location::ActiveModel {
            location_id: ActiveValue::Set(self.location_id),
            address: ActiveValue::Set(self.address),
            latitude: ActiveValue::Set(52.52),
            longitude: ActiveValue::Set(13.405),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location, optionally owned by the given user.
pub async fn create_location(
    db: &DatabaseConnection,
    user_id: Option<&str>,
) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db)
        .user_id(user_id.map(str::to_string))
        .build()
        .await
}
