use std::fmt;

/// One table of the parcel delivery schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Location,
    Locker,
    Item,
    Merchant,
    Driver,
    Card,
    WalletTransaction,
    Parcel,
    DeliveryUpdate,
    Order,
    OrderItem,
    ParcelAssignment,
}

impl EntityKind {
    /// Generation and insertion order. Every kind appears after all of its parents.
    pub const INSERT_ORDER: [EntityKind; 13] = [
        EntityKind::User,
        EntityKind::Location,
        EntityKind::Locker,
        EntityKind::Item,
        EntityKind::Merchant,
        EntityKind::Driver,
        EntityKind::Card,
        EntityKind::WalletTransaction,
        EntityKind::Parcel,
        EntityKind::DeliveryUpdate,
        EntityKind::Order,
        EntityKind::OrderItem,
        EntityKind::ParcelAssignment,
    ];

    /// Deletion order: the exact reverse of `INSERT_ORDER`, so children go before parents.
    pub fn teardown_order() -> impl Iterator<Item = EntityKind> {
        Self::INSERT_ORDER.into_iter().rev()
    }

    /// Name of the backing database table.
    pub fn table_name(self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Location => "location",
            EntityKind::Locker => "locker",
            EntityKind::Item => "item",
            EntityKind::Merchant => "merchant",
            EntityKind::Driver => "driver",
            EntityKind::Card => "card",
            EntityKind::WalletTransaction => "wallet_transaction",
            EntityKind::Parcel => "parcel",
            EntityKind::DeliveryUpdate => "delivery_update",
            EntityKind::Order => "order",
            EntityKind::OrderItem => "order_item",
            EntityKind::ParcelAssignment => "parcel_assignment",
        }
    }

    /// Kinds this kind holds foreign keys to, including optional references.
    #[cfg(test)]
    pub fn parents(self) -> &'static [EntityKind] {
        match self {
            EntityKind::User | EntityKind::Item => &[],
            EntityKind::Location => &[EntityKind::User],
            EntityKind::Locker => &[EntityKind::Location],
            EntityKind::Merchant => &[EntityKind::User, EntityKind::Location],
            EntityKind::Driver | EntityKind::Card | EntityKind::WalletTransaction => {
                &[EntityKind::User]
            }
            EntityKind::Parcel => &[EntityKind::User, EntityKind::Locker],
            EntityKind::DeliveryUpdate => &[EntityKind::Parcel],
            EntityKind::Order => &[EntityKind::User, EntityKind::Merchant],
            EntityKind::OrderItem => &[EntityKind::Order, EntityKind::Item],
            EntityKind::ParcelAssignment => &[EntityKind::Parcel, EntityKind::Driver],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityName;

    fn position(kind: EntityKind) -> usize {
        EntityKind::INSERT_ORDER
            .iter()
            .position(|k| *k == kind)
            .unwrap()
    }

    #[test]
    fn insert_order_lists_every_kind_once() {
        let mut seen = std::collections::HashSet::new();
        for kind in EntityKind::INSERT_ORDER {
            assert!(seen.insert(kind), "{} listed twice", kind);
        }
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn parents_precede_children_in_insert_order() {
        for kind in EntityKind::INSERT_ORDER {
            for parent in kind.parents() {
                assert!(
                    position(*parent) < position(kind),
                    "{} must be inserted before {}",
                    parent,
                    kind
                );
            }
        }
    }

    #[test]
    fn teardown_order_is_exact_reverse_of_insert_order() {
        let teardown: Vec<_> = EntityKind::teardown_order().collect();
        let mut reversed = EntityKind::INSERT_ORDER.to_vec();
        reversed.reverse();

        assert_eq!(teardown, reversed);
        assert_eq!(teardown.first(), Some(&EntityKind::ParcelAssignment));
        assert_eq!(teardown.last(), Some(&EntityKind::User));
    }

    #[test]
    fn children_are_deleted_before_parents() {
        let teardown: Vec<_> = EntityKind::teardown_order().collect();
        let index = |kind| teardown.iter().position(|k| *k == kind).unwrap();

        for kind in EntityKind::INSERT_ORDER {
            for parent in kind.parents() {
                assert!(index(kind) < index(*parent));
            }
        }
    }

    #[test]
    fn table_names_match_entities() {
        use entity::prelude::*;

        assert_eq!(EntityKind::User.table_name(), User.table_name());
        assert_eq!(EntityKind::Location.table_name(), Location.table_name());
        assert_eq!(EntityKind::Locker.table_name(), Locker.table_name());
        assert_eq!(EntityKind::Item.table_name(), Item.table_name());
        assert_eq!(EntityKind::Merchant.table_name(), Merchant.table_name());
        assert_eq!(EntityKind::Driver.table_name(), Driver.table_name());
        assert_eq!(EntityKind::Card.table_name(), Card.table_name());
        assert_eq!(
            EntityKind::WalletTransaction.table_name(),
            WalletTransaction.table_name()
        );
        assert_eq!(EntityKind::Parcel.table_name(), Parcel.table_name());
        assert_eq!(
            EntityKind::DeliveryUpdate.table_name(),
            DeliveryUpdate.table_name()
        );
        assert_eq!(EntityKind::Order.table_name(), Order.table_name());
        assert_eq!(EntityKind::OrderItem.table_name(), OrderItem.table_name());
        assert_eq!(
            EntityKind::ParcelAssignment.table_name(),
            ParcelAssignment.table_name()
        );
    }
}
