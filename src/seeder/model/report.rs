use crate::seeder::model::kind::EntityKind;

/// Rows written per table by a seed run, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedReport {
    rows: Vec<(EntityKind, u64)>,
}

impl SeedReport {
    /// Records the rows written for a table.
    pub fn record(&mut self, kind: EntityKind, rows: u64) {
        self.rows.push((kind, rows));
    }

    /// Rows written for a table, `0` when the table was never recorded.
    pub fn rows(&self, kind: EntityKind) -> u64 {
        self.rows
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, rows)| *rows)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().map(|(_, rows)| rows).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, u64)> + '_ {
        self.rows.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_recorded_rows() {
        let mut report = SeedReport::default();
        report.record(EntityKind::User, 3);
        report.record(EntityKind::Parcel, 7);

        assert_eq!(report.rows(EntityKind::User), 3);
        assert_eq!(report.rows(EntityKind::Parcel), 7);
        assert_eq!(report.rows(EntityKind::Order), 0);
        assert_eq!(report.total(), 10);
    }

    #[test]
    fn iterates_in_recording_order() {
        let mut report = SeedReport::default();
        report.record(EntityKind::Item, 1);
        report.record(EntityKind::User, 2);

        let kinds: Vec<_> = report.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![EntityKind::Item, EntityKind::User]);
    }
}
