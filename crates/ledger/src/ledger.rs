use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentfleet_core::{CarId, ValueObject};

/// One completed rental transaction (immutable).
///
/// The cost is captured at rent time (`daily price × days`) and stays in the
/// ledger forever, even after the car comes back. Records reference a car by
/// id; the car holds no back-reference to its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub car_id: CarId,
    /// Rental duration in days (always positive).
    pub days: u32,
    /// Total cost in whole currency units.
    pub cost: u64,
    /// When the rental was taken out. Supplied by the caller so the ledger
    /// stays deterministic.
    pub recorded_at: DateTime<Utc>,
}

impl ValueObject for RentalRecord {}

/// Append-only transaction log used to answer revenue queries.
#[derive(Debug, Default, Clone)]
pub struct RentalLedger {
    records: Vec<RentalRecord>,
}

impl RentalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction. Never fails; the ledger has no capacity bound.
    pub fn record(&mut self, record: RentalRecord) {
        self.records.push(record);
    }

    /// Sum of `cost` over all records; zero for an empty ledger. Pure.
    pub fn total_revenue(&self) -> u64 {
        self.records.iter().map(|r| r.cost).sum()
    }

    /// All records, in append order.
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(car_id: u32, days: u32, cost: u64) -> RentalRecord {
        RentalRecord {
            car_id: CarId::new(car_id),
            days,
            cost,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn empty_ledger_has_zero_revenue() {
        let ledger = RentalLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_revenue(), 0);
    }

    #[test]
    fn revenue_accumulates_across_records() {
        let mut ledger = RentalLedger::new();
        ledger.record(record(1001, 5, 1500));
        ledger.record(record(1002, 2, 600));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total_revenue(), 2100);
    }

    #[test]
    fn records_are_kept_in_append_order() {
        let mut ledger = RentalLedger::new();
        ledger.record(record(1002, 1, 200));
        ledger.record(record(1001, 1, 300));

        let ids: Vec<u32> = ledger.records().iter().map(|r| r.car_id.as_u32()).collect();
        assert_eq!(ids, vec![1002, 1001]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: at every point in a ledger's life, `total_revenue` equals
        /// the sum of the costs recorded so far, and reading it twice yields
        /// the same number (no drift).
        #[test]
        fn total_revenue_matches_sum_of_costs(
            costs in prop::collection::vec(0u64..1_000_000u64, 0..50)
        ) {
            let mut ledger = RentalLedger::new();
            let mut expected: u64 = 0;

            for (i, &cost) in costs.iter().enumerate() {
                ledger.record(record(1001 + i as u32, 1, cost));
                expected += cost;

                prop_assert_eq!(ledger.total_revenue(), expected);
                prop_assert_eq!(ledger.total_revenue(), ledger.total_revenue());
            }

            prop_assert_eq!(ledger.len(), costs.len());
        }
    }
}
