pub use super::card::Entity as Card;
pub use super::delivery_update::Entity as DeliveryUpdate;
pub use super::driver::Entity as Driver;
pub use super::item::Entity as Item;
pub use super::location::Entity as Location;
pub use super::locker::Entity as Locker;
pub use super::merchant::Entity as Merchant;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::parcel::Entity as Parcel;
pub use super::parcel_assignment::Entity as ParcelAssignment;
pub use super::user::Entity as User;
pub use super::wallet_transaction::Entity as WalletTransaction;
