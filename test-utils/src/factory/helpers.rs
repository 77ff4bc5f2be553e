//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a parcel with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as both sender and receiver)
/// 2. Location owned by that user
/// 3. Locker at that location (used as pickup and destination)
/// 4. Parcel
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, location, locker, parcel))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_parcel_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::location::Model,
        entity::locker::Model,
        entity::parcel::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let location = crate::factory::location::create_location(db, Some(&user.user_id)).await?;
    let locker = crate::factory::locker::create_locker(db, &location.location_id).await?;
    let parcel = crate::factory::parcel::create_parcel(
        db,
        &user.user_id,
        &user.user_id,
        &locker.locker_id,
    )
    .await?;

    Ok((user, location, locker, parcel))
}
