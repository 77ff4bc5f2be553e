//! Factory methods for creating test data.
//!
//! Factories insert a single row with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let location = factory::create_location(&db, Some(&user.user_id)).await?;
//!
//!     // Create a parcel with every row it depends on
//!     let (sender, location, locker, parcel) =
//!         factory::helpers::create_parcel_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `location` - Create location entities
//! - `locker` - Create locker entities
//! - `parcel` - Create parcel entities
//! - `helpers` - ID generation and entities with dependencies

pub mod helpers;
pub mod location;
pub mod locker;
pub mod parcel;
pub mod user;

pub use location::create_location;
pub use locker::create_locker;
pub use parcel::create_parcel;
pub use user::create_user;
