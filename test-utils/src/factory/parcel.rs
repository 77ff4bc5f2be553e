//! Parcel factory for creating test parcel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{ParcelStatus, ParcelType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test parcels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let parcel = ParcelFactory::new(&db, &sender.user_id, &receiver.user_id, &locker.locker_id)
///     .status(ParcelStatus::InTransit)
///     .build()
///     .await?;
/// ```
pub struct ParcelFactory<'a> {
    db: &'a DatabaseConnection,
    parcel_id: String,
    sender_id: String,
    receiver_id: String,
    pickup_locker_id: String,
    destination_locker_id: String,
    status: ParcelStatus,
}

impl<'a> ParcelFactory<'a> {
    /// Creates a new ParcelFactory with default values.
    ///
    /// Defaults:
    /// - parcel_id: `"parcel-{id}"`
    /// - destination locker: same as the pickup locker
    /// - status: `ParcelStatus::Created`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `sender_id` - User sending the parcel
    /// - `receiver_id` - User receiving the parcel
    /// - `locker_id` - Pickup locker
    pub fn new(
        db: &'a DatabaseConnection,
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        locker_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        let locker_id = locker_id.into();
        Self {
            db,
            parcel_id: format!("parcel-{}", id),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            pickup_locker_id: locker_id.clone(),
            destination_locker_id: locker_id,
            status: ParcelStatus::Created,
        }
    }

    /// Sets the destination locker.
    pub fn destination_locker_id(mut self, locker_id: impl Into<String>) -> Self {
        self.destination_locker_id = locker_id.into();
        self
    }

    /// Sets the parcel status.
    pub fn status(mut self, status: ParcelStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the parcel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::parcel::Model)` - Created parcel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::parcel::Model, DbErr> {
        let now = Utc::now();
        entity::parcel::ActiveModel {
            tracking_id: ActiveValue::Set(format!("track-{}", self.parcel_id)),
            parcel_id: ActiveValue::Set(self.parcel_id),
            sender_id: ActiveValue::Set(self.sender_id),
            receiver_id: ActiveValue::Set(self.receiver_id),
            pickup_locker_id: ActiveValue::Set(self.pickup_locker_id),
            destination_locker_id: ActiveValue::Set(self.destination_locker_id),
            weight: ActiveValue::Set(1.5),
            parcel_type: ActiveValue::Set(ParcelType::Durable),
            insurance_package: ActiveValue::Set(false),
            parcel_value: ActiveValue::Set(100.0),
            insurance_amount: ActiveValue::Set(10.0),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a parcel with default values.
///
/// Shorthand for `ParcelFactory::new(db, sender_id, receiver_id, locker_id).build().await`.
pub async fn create_parcel(
    db: &DatabaseConnection,
    sender_id: impl Into<String>,
    receiver_id: impl Into<String>,
    locker_id: impl Into<String>,
) -> Result<entity::parcel::Model, DbErr> {
    ParcelFactory::new(db, sender_id, receiver_id, locker_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_parcel_with_dependencies;
    use crate::factory::locker::create_locker;

    #[tokio::test]
    async fn creates_parcel_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_parcel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, location, locker, parcel) = create_parcel_with_dependencies(db).await?;

        assert_eq!(location.user_id, Some(user.user_id.clone()));
        assert_eq!(locker.location_id, location.location_id);
        assert_eq!(parcel.sender_id, user.user_id);
        assert_eq!(parcel.pickup_locker_id, locker.locker_id);
        assert_eq!(parcel.status, ParcelStatus::Created);

        Ok(())
    }

    #[tokio::test]
    async fn creates_parcel_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_parcel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, location, pickup, _) = create_parcel_with_dependencies(db).await?;
        let destination = create_locker(db, &location.location_id).await?;

        let parcel = ParcelFactory::new(db, &user.user_id, &user.user_id, &pickup.locker_id)
            .destination_locker_id(&destination.locker_id)
            .status(ParcelStatus::InTransit)
            .build()
            .await?;

        assert_eq!(parcel.destination_locker_id, destination.locker_id);
        assert_eq!(parcel.status, ParcelStatus::InTransit);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_parcel_with_unknown_sender() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_parcel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, locker, _) = create_parcel_with_dependencies(db).await?;
        let result = create_parcel(db, "missing-user", "missing-user", &locker.locker_id).await;

        assert!(result.is_err());

        Ok(())
    }
}
