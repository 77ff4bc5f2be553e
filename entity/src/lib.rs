//! sea-orm entities for the parcel delivery schema.
//!
//! One module per table plus the string-backed enums shared between them.
//! Identifiers are UUID strings assigned by the caller, never by the database.

pub mod prelude;

pub mod card;
pub mod delivery_update;
pub mod driver;
pub mod item;
pub mod location;
pub mod locker;
pub mod merchant;
pub mod order;
pub mod order_item;
pub mod parcel;
pub mod parcel_assignment;
pub mod sea_orm_active_enums;
pub mod user;
pub mod wallet_transaction;
