//! Seeded generation of a complete, referentially consistent fixture set.
//!
//! `FixtureGenerator` draws every value from a single RNG, so the same seed and
//! reference time always reproduce the same dataset. Batches are built in
//! `EntityKind::INSERT_ORDER`; each batch only references rows of earlier batches.

pub mod catalog;

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use entity::{
    card, delivery_update, driver, item, location, locker, merchant, order, order_item, parcel,
    parcel_assignment,
    sea_orm_active_enums::{
        AssignmentStatus, DriverStatus, ParcelStatus, ParcelType, PaymentMethod, TransactionType,
    },
    user, wallet_transaction,
};
use fake::{
    faker::{
        address::en::{BuildingNumber, StreetName},
        company::en::CompanyName,
        creditcard::en::CreditCardNumber,
        internet::en::{Password, SafeEmail},
        lorem::en::Sentence,
        name::en::Name,
        phone_number::en::PhoneNumber,
    },
    Fake,
};
use rand::{distr::Alphanumeric, seq::IndexedRandom, Rng};

use crate::seeder::{
    error::seed::SeedError,
    generator::catalog::{PRODUCT_ADJECTIVES, PRODUCT_MATERIALS, PRODUCT_NOUNS, VEHICLE_MODELS},
    model::{counts::SeedCounts, fixture::FixtureSet, kind::EntityKind},
};

const PARCEL_STATUSES: [ParcelStatus; 5] = [
    ParcelStatus::Created,
    ParcelStatus::PickedUp,
    ParcelStatus::InTransit,
    ParcelStatus::Delivered,
    ParcelStatus::Cancelled,
];

const ASSIGNMENT_STATUSES: [AssignmentStatus; 4] = [
    AssignmentStatus::Assigned,
    AssignmentStatus::PickedUp,
    AssignmentStatus::Delivered,
    AssignmentStatus::Cancelled,
];

const SECONDS_PER_DAY: i64 = 86_400;

/// Inclusive bounds on the per-parent child counts.
const DELIVERY_UPDATES_PER_PARCEL: (usize, usize) = (1, 5);
const ITEMS_PER_ORDER: (usize, usize) = (1, 5);
const ASSIGNMENTS_PER_PARCEL: (usize, usize) = (1, 3);

pub struct FixtureGenerator<R> {
    rng: R,
    /// Reference time for "recent" and "future" timestamps.
    now: DateTime<Utc>,
}

impl<R: Rng> FixtureGenerator<R> {
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    /// Generates every batch in dependency order.
    ///
    /// Nothing is written anywhere; the caller decides what to do with the set.
    ///
    /// # Returns
    /// - `Ok(FixtureSet)` - All batches, sized according to `counts`
    /// - `Err(SeedError::EmptyPool)` - A batch needs a reference into an empty batch
    /// - `Err(SeedError::SubsetTooLarge)` - More merchants or drivers than users requested
    pub fn generate(&mut self, counts: &SeedCounts) -> Result<FixtureSet, SeedError> {
        let users = self.users(counts.users);
        let locations = self.locations(counts.locations, &users);
        let lockers = self.lockers(counts.lockers, &locations)?;
        let items = self.items(counts.items);
        let merchants = self.merchants(counts.merchants, &users, &locations)?;
        let drivers = self.drivers(counts.drivers, &users)?;
        let cards = self.cards(counts.cards, &users)?;
        let wallet_transactions = self.wallet_transactions(counts.wallet_transactions, &users)?;
        let parcels = self.parcels(counts.parcels, &users, &lockers)?;
        let delivery_updates = self.delivery_updates(&parcels);
        let orders = self.orders(counts.orders, &users, &merchants)?;
        let order_items = self.order_items(&orders, &items)?;
        let parcel_assignments = self.parcel_assignments(&parcels, &drivers)?;

        Ok(FixtureSet {
            users,
            locations,
            lockers,
            items,
            merchants,
            drivers,
            cards,
            wallet_transactions,
            parcels,
            delivery_updates,
            orders,
            order_items,
            parcel_assignments,
        })
    }

    fn users(&mut self, count: usize) -> Vec<user::Model> {
        (0..count)
            .map(|_| user::Model {
                user_id: self.id(),
                name: Name().fake_with_rng(&mut self.rng),
                email: SafeEmail().fake_with_rng(&mut self.rng),
                phone_number: PhoneNumber().fake_with_rng(&mut self.rng),
                password_hash: Password(8..20).fake_with_rng(&mut self.rng),
                default_location_id: None,
                created_at: self.recent(),
                updated_at: self.recent(),
            })
            .collect()
    }

    /// Locations are owned by a random user, or by nobody when there are no users.
    fn locations(&mut self, count: usize, users: &[user::Model]) -> Vec<location::Model> {
        (0..count)
            .map(|_| location::Model {
                location_id: self.id(),
                address: self.street_address(),
                latitude: self.rng.random_range(-90.0..=90.0),
                longitude: self.rng.random_range(-180.0..=180.0),
                user_id: users.choose(&mut self.rng).map(|u| u.user_id.clone()),
                created_at: self.recent(),
                updated_at: self.recent(),
            })
            .collect()
    }

    fn lockers(
        &mut self,
        count: usize,
        locations: &[location::Model],
    ) -> Result<Vec<locker::Model>, SeedError> {
        let mut lockers = Vec::with_capacity(count);
        for _ in 0..count {
            let location = self.pick(locations, EntityKind::Locker, EntityKind::Location)?;
            lockers.push(locker::Model {
                locker_id: self.id(),
                location_id: location.location_id.clone(),
                locker_code: self.alphanumeric(6),
                is_available: self.rng.random_bool(0.5),
                created_at: self.recent(),
                updated_at: self.recent(),
            });
        }
        Ok(lockers)
    }

    fn items(&mut self, count: usize) -> Vec<item::Model> {
        (0..count)
            .map(|_| item::Model {
                item_id: self.id(),
                name: self.product_name(),
                description: Sentence(6..14).fake_with_rng(&mut self.rng),
                price: self.amount(10.0, 1000.0),
                size: self.one_of(PRODUCT_ADJECTIVES).to_string(),
                weight: self.amount(0.5, 10.0),
                created_at: self.recent(),
                updated_at: self.recent(),
            })
            .collect()
    }

    fn merchants(
        &mut self,
        count: usize,
        users: &[user::Model],
        locations: &[location::Model],
    ) -> Result<Vec<merchant::Model>, SeedError> {
        let owners = self.distinct_users(users, count, EntityKind::Merchant)?;

        let mut merchants = Vec::with_capacity(count);
        for owner in owners {
            let address = self.pick(locations, EntityKind::Merchant, EntityKind::Location)?;
            merchants.push(merchant::Model {
                merchant_id: self.id(),
                user_id: owner.user_id.clone(),
                business_name: CompanyName().fake_with_rng(&mut self.rng),
                contact_person: Name().fake_with_rng(&mut self.rng),
                contact_email: SafeEmail().fake_with_rng(&mut self.rng),
                contact_phone: PhoneNumber().fake_with_rng(&mut self.rng),
                address_id: address.location_id.clone(),
                created_at: self.recent(),
                updated_at: self.recent(),
            });
        }
        Ok(merchants)
    }

    fn drivers(
        &mut self,
        count: usize,
        users: &[user::Model],
    ) -> Result<Vec<driver::Model>, SeedError> {
        let owners = self.distinct_users(users, count, EntityKind::Driver)?;

        Ok(owners
            .into_iter()
            .map(|owner| driver::Model {
                driver_id: self.id(),
                user_id: owner.user_id.clone(),
                vehicle_info: self.one_of(VEHICLE_MODELS).to_string(),
                license_number: self.alphanumeric(10),
                status: self.one_of(&[DriverStatus::Active, DriverStatus::Inactive]),
                created_at: self.recent(),
                updated_at: self.recent(),
            })
            .collect())
    }

    fn cards(
        &mut self,
        count: usize,
        users: &[user::Model],
    ) -> Result<Vec<card::Model>, SeedError> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            let holder = self.pick(users, EntityKind::Card, EntityKind::User)?;
            let expires = self.future();
            cards.push(card::Model {
                card_id: self.id(),
                user_id: holder.user_id.clone(),
                card_number: CreditCardNumber().fake_with_rng(&mut self.rng),
                expiry_date: card_expiry(expires),
                cvv: self.rng.random_range(100..1000).to_string(),
                created_at: self.recent(),
                updated_at: self.recent(),
            });
        }
        Ok(cards)
    }

    fn wallet_transactions(
        &mut self,
        count: usize,
        users: &[user::Model],
    ) -> Result<Vec<wallet_transaction::Model>, SeedError> {
        let mut transactions = Vec::with_capacity(count);
        for _ in 0..count {
            let owner = self.pick(users, EntityKind::WalletTransaction, EntityKind::User)?;
            transactions.push(wallet_transaction::Model {
                transaction_id: self.id(),
                user_id: owner.user_id.clone(),
                amount: self.amount(10.0, 1000.0),
                transaction_type: self.one_of(&[TransactionType::Credit, TransactionType::Debit]),
                transaction_date: self.recent(),
                payment_method: self.one_of(&[PaymentMethod::BankTransfer, PaymentMethod::Card]),
            });
        }
        Ok(transactions)
    }

    /// Sender, receiver and both lockers are drawn independently and may coincide.
    fn parcels(
        &mut self,
        count: usize,
        users: &[user::Model],
        lockers: &[locker::Model],
    ) -> Result<Vec<parcel::Model>, SeedError> {
        let mut parcels = Vec::with_capacity(count);
        for _ in 0..count {
            let sender = self.pick(users, EntityKind::Parcel, EntityKind::User)?;
            let receiver = self.pick(users, EntityKind::Parcel, EntityKind::User)?;
            let pickup = self.pick(lockers, EntityKind::Parcel, EntityKind::Locker)?;
            let destination = self.pick(lockers, EntityKind::Parcel, EntityKind::Locker)?;
            parcels.push(parcel::Model {
                parcel_id: self.id(),
                sender_id: sender.user_id.clone(),
                receiver_id: receiver.user_id.clone(),
                pickup_locker_id: pickup.locker_id.clone(),
                destination_locker_id: destination.locker_id.clone(),
                weight: self.amount(0.5, 50.0),
                parcel_type: self.one_of(&[ParcelType::Fragile, ParcelType::Durable]),
                insurance_package: self.rng.random_bool(0.5),
                parcel_value: self.amount(10.0, 500.0),
                insurance_amount: self.amount(5.0, 100.0),
                tracking_id: self.id(),
                status: self.one_of(&PARCEL_STATUSES),
                created_at: self.recent(),
                updated_at: self.recent(),
            });
        }
        Ok(parcels)
    }

    fn delivery_updates(&mut self, parcels: &[parcel::Model]) -> Vec<delivery_update::Model> {
        let mut updates = Vec::new();
        for parcel in parcels {
            let count = self.child_count(DELIVERY_UPDATES_PER_PARCEL);
            for _ in 0..count {
                updates.push(delivery_update::Model {
                    delivery_update_id: self.id(),
                    parcel_id: parcel.parcel_id.clone(),
                    status: self.one_of(&PARCEL_STATUSES),
                    updated_at: self.recent(),
                });
            }
        }
        updates
    }

    /// Orders carry a random merchant, or none only when there are no merchants.
    fn orders(
        &mut self,
        count: usize,
        users: &[user::Model],
        merchants: &[merchant::Model],
    ) -> Result<Vec<order::Model>, SeedError> {
        let mut orders = Vec::with_capacity(count);
        for _ in 0..count {
            let customer = self.pick(users, EntityKind::Order, EntityKind::User)?;
            orders.push(order::Model {
                order_id: self.id(),
                user_id: customer.user_id.clone(),
                merchant_id: merchants
                    .choose(&mut self.rng)
                    .map(|m| m.merchant_id.clone()),
                order_date: self.recent(),
                total_cost: self.amount(50.0, 500.0),
                delivery_cost: self.amount(5.0, 50.0),
                insurance_amount: self.amount(10.0, 100.0),
            });
        }
        Ok(orders)
    }

    fn order_items(
        &mut self,
        orders: &[order::Model],
        items: &[item::Model],
    ) -> Result<Vec<order_item::Model>, SeedError> {
        let mut lines = Vec::new();
        for order in orders {
            let count = self.child_count(ITEMS_PER_ORDER);
            for _ in 0..count {
                let item = self.pick(items, EntityKind::OrderItem, EntityKind::Item)?;
                lines.push(order_item::Model {
                    order_item_id: self.id(),
                    order_id: order.order_id.clone(),
                    item_id: item.item_id.clone(),
                    quantity: self.rng.random_range(1..=10),
                });
            }
        }
        Ok(lines)
    }

    fn parcel_assignments(
        &mut self,
        parcels: &[parcel::Model],
        drivers: &[driver::Model],
    ) -> Result<Vec<parcel_assignment::Model>, SeedError> {
        let mut assignments = Vec::new();
        for parcel in parcels {
            let count = self.child_count(ASSIGNMENTS_PER_PARCEL);
            for _ in 0..count {
                let driver = self.pick(drivers, EntityKind::ParcelAssignment, EntityKind::Driver)?;
                assignments.push(parcel_assignment::Model {
                    assignment_id: self.id(),
                    parcel_id: parcel.parcel_id.clone(),
                    driver_id: driver.driver_id.clone(),
                    assigned_at: self.recent(),
                    status: self.one_of(&ASSIGNMENT_STATUSES),
                });
            }
        }
        Ok(assignments)
    }

    /// Uniform draw of a referenced parent row.
    fn pick<'p, T>(
        &mut self,
        pool: &'p [T],
        child: EntityKind,
        parent: EntityKind,
    ) -> Result<&'p T, SeedError> {
        pool.choose(&mut self.rng)
            .ok_or(SeedError::EmptyPool { child, parent })
    }

    /// Draws `count` distinct users without replacement.
    fn distinct_users<'p>(
        &mut self,
        users: &'p [user::Model],
        count: usize,
        kind: EntityKind,
    ) -> Result<Vec<&'p user::Model>, SeedError> {
        if count > users.len() {
            return Err(SeedError::SubsetTooLarge {
                kind,
                requested: count,
                available: users.len(),
            });
        }
        Ok(users.choose_multiple(&mut self.rng, count).collect())
    }

    /// Uniform draw from a non-empty constant list.
    fn one_of<T: Copy>(&mut self, values: &[T]) -> T {
        values[self.rng.random_range(0..values.len())]
    }

    fn child_count(&mut self, (min, max): (usize, usize)) -> usize {
        self.rng.random_range(min..=max)
    }

    /// Random UUID v4 built from RNG bytes so it follows the seed.
    fn id(&mut self) -> String {
        uuid::Builder::from_random_bytes(self.rng.random())
            .into_uuid()
            .to_string()
    }

    /// A time within the day before the reference time.
    fn recent(&mut self) -> DateTime<Utc> {
        self.now - TimeDelta::seconds(self.rng.random_range(0..=SECONDS_PER_DAY))
    }

    /// A time within the year after the reference time.
    fn future(&mut self) -> DateTime<Utc> {
        self.now + TimeDelta::seconds(self.rng.random_range(1..=365 * SECONDS_PER_DAY))
    }

    fn amount(&mut self, min: f64, max: f64) -> f64 {
        round_cents(self.rng.random_range(min..=max))
    }

    fn alphanumeric(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(self.rng.sample(Alphanumeric)))
            .collect()
    }

    fn street_address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        format!("{} {}", number, street)
    }

    fn product_name(&mut self) -> String {
        let adjective = self.one_of(PRODUCT_ADJECTIVES);
        let material = self.one_of(PRODUCT_MATERIALS);
        let noun = self.one_of(PRODUCT_NOUNS);
        format!("{} {} {}", adjective, material, noun)
    }
}

/// Formats a card expiry as `MM/YY`.
pub fn card_expiry(date: DateTime<Utc>) -> String {
    format!("{:02}/{:02}", date.month(), date.year().rem_euclid(100))
}

/// Rounds to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
