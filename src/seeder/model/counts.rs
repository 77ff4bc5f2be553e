/// Number of rows to generate for each fixed-size batch.
///
/// Delivery updates, order items and parcel assignments are not listed here: their
/// sizes follow from the parcels and orders they hang off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub users: usize,
    pub locations: usize,
    pub lockers: usize,
    pub items: usize,
    /// Drawn from `users` without replacement.
    pub merchants: usize,
    /// Drawn from `users` without replacement, independently of merchants.
    pub drivers: usize,
    pub cards: usize,
    pub wallet_transactions: usize,
    pub parcels: usize,
    pub orders: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            users: 200,
            locations: 100,
            lockers: 200,
            items: 200,
            merchants: 50,
            drivers: 50,
            cards: 300,
            wallet_transactions: 500,
            parcels: 1000,
            orders: 500,
        }
    }
}

#[cfg(test)]
impl SeedCounts {
    /// A small dataset that keeps database-backed tests fast.
    pub fn small() -> Self {
        Self {
            users: 20,
            locations: 10,
            lockers: 15,
            items: 12,
            merchants: 5,
            drivers: 6,
            cards: 25,
            wallet_transactions: 30,
            parcels: 40,
            orders: 25,
        }
    }

    /// Every batch empty.
    pub fn empty() -> Self {
        Self {
            users: 0,
            locations: 0,
            lockers: 0,
            items: 0,
            merchants: 0,
            drivers: 0,
            cards: 0,
            wallet_transactions: 0,
            parcels: 0,
            orders: 0,
        }
    }
}
