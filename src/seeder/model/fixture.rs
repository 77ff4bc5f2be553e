use entity::{
    card, delivery_update, driver, item, location, locker, merchant, order, order_item, parcel,
    parcel_assignment, user, wallet_transaction,
};

use crate::seeder::model::kind::EntityKind;

/// Every batch produced by one generation pass, held in memory until persisted.
///
/// Foreign keys in each batch only point at rows of batches listed above it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixtureSet {
    pub users: Vec<user::Model>,
    pub locations: Vec<location::Model>,
    pub lockers: Vec<locker::Model>,
    pub items: Vec<item::Model>,
    pub merchants: Vec<merchant::Model>,
    pub drivers: Vec<driver::Model>,
    pub cards: Vec<card::Model>,
    pub wallet_transactions: Vec<wallet_transaction::Model>,
    pub parcels: Vec<parcel::Model>,
    pub delivery_updates: Vec<delivery_update::Model>,
    pub orders: Vec<order::Model>,
    pub order_items: Vec<order_item::Model>,
    pub parcel_assignments: Vec<parcel_assignment::Model>,
}

impl FixtureSet {
    /// Number of generated rows of the given kind.
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::User => self.users.len(),
            EntityKind::Location => self.locations.len(),
            EntityKind::Locker => self.lockers.len(),
            EntityKind::Item => self.items.len(),
            EntityKind::Merchant => self.merchants.len(),
            EntityKind::Driver => self.drivers.len(),
            EntityKind::Card => self.cards.len(),
            EntityKind::WalletTransaction => self.wallet_transactions.len(),
            EntityKind::Parcel => self.parcels.len(),
            EntityKind::DeliveryUpdate => self.delivery_updates.len(),
            EntityKind::Order => self.orders.len(),
            EntityKind::OrderItem => self.order_items.len(),
            EntityKind::ParcelAssignment => self.parcel_assignments.len(),
        }
    }

    /// Total number of generated rows across all kinds.
    pub fn total(&self) -> usize {
        EntityKind::INSERT_ORDER
            .iter()
            .map(|kind| self.len(*kind))
            .sum()
    }
}
