//! Stat ledger: current stat values and their point deltas.
//!
//! The ledger stores one value per stat name. Pricing always reads the
//! catalog definitions alongside it, so a ledger never caches costs.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::data::StatData;
use crate::math::saturate;

/// Result of a stat change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatChange {
    /// Value the caller asked for.
    pub requested: i32,
    /// Value actually stored after clamping.
    pub applied: i32,
    /// Whether the request was outside `[min, max]`.
    pub clamped: bool,
    /// Total stat cost of the ledger after the change.
    pub ledger_cost: i32,
}

/// Current value of every tunable stat.
///
/// Values are kept in name order so iteration is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatLedger {
    values: BTreeMap<String, i32>,
}

impl StatLedger {
    /// Create a ledger with every catalog stat at its baseline.
    #[must_use]
    pub fn at_baseline(catalog: &Catalog) -> Self {
        Self {
            values: catalog
                .stats()
                .map(|stat| (stat.name.clone(), stat.base))
                .collect(),
        }
    }

    /// Current value of a stat, if the ledger tracks it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.values.get(name).copied()
    }

    /// Current value for a definition, defaulting to its baseline.
    #[must_use]
    pub fn value_of(&self, stat: &StatData) -> i32 {
        self.get(&stat.name).unwrap_or(stat.base)
    }

    /// Store a value for `stat`, clamped into its bounds.
    ///
    /// Returns the clamped value and whether clamping happened.
    pub fn set(&mut self, stat: &StatData, requested: i32) -> (i32, bool) {
        let applied = stat.clamp(requested);
        self.values.insert(stat.name.clone(), applied);
        (applied, applied != requested)
    }

    /// Sum of every stat's improvement cost minus worsening refunds.
    #[must_use]
    pub fn total_cost(&self, catalog: &Catalog) -> i32 {
        saturate(self.total_cost_wide(catalog))
    }

    /// Ledger cost without narrowing to `i32`.
    #[must_use]
    pub fn total_cost_wide(&self, catalog: &Catalog) -> i64 {
        catalog
            .stats()
            .map(|stat| i64::from(stat.cost_at(self.value_of(stat))))
            .sum()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CatalogData, StatFormat};

    fn stat(name: &str, base: i32, min: i32, max: Option<i32>, reverse: bool) -> StatData {
        StatData {
            name: name.to_string(),
            base,
            min,
            max,
            up_cost: 2,
            down_cost: 1,
            reverse,
            format: StatFormat::Plain,
        }
    }

    fn create_test_catalog() -> Catalog {
        Catalog::new(CatalogData {
            stats: vec![
                stat("HP", 7, 3, None, false),
                stat("Shoot", 7, 5, Some(11), true),
            ],
            ..CatalogData::default()
        })
        .expect("valid catalog")
    }

    #[test]
    fn test_baseline_costs_nothing() {
        let catalog = create_test_catalog();
        let ledger = StatLedger::at_baseline(&catalog);
        assert_eq!(ledger.get("HP"), Some(7));
        assert_eq!(ledger.total_cost(&catalog), 0);
    }

    #[test]
    fn test_set_clamps_out_of_range() {
        let catalog = create_test_catalog();
        let shoot = catalog.stat("Shoot").expect("Shoot defined");
        let mut ledger = StatLedger::at_baseline(&catalog);

        assert_eq!(ledger.set(shoot, 3), (5, true));
        assert_eq!(ledger.get("Shoot"), Some(5));

        assert_eq!(ledger.set(shoot, 6), (6, false));
    }

    #[test]
    fn test_total_cost_mixes_improvements_and_refunds() {
        let catalog = create_test_catalog();
        let mut ledger = StatLedger::at_baseline(&catalog);
        let hp = catalog.stat("HP").expect("HP defined");
        let shoot = catalog.stat("Shoot").expect("Shoot defined");

        // +3 HP at 2 each.
        ledger.set(hp, 10);
        // Shoot 9+ is two steps worse, refunds 1 each.
        ledger.set(shoot, 9);
        assert_eq!(ledger.total_cost(&catalog), 6 - 2);
    }

    #[test]
    fn test_missing_value_uses_baseline() {
        let catalog = create_test_catalog();
        let ledger = StatLedger::default();
        assert_eq!(ledger.total_cost(&catalog), 0);
        let hp = catalog.stat("HP").expect("HP defined");
        assert_eq!(ledger.value_of(hp), 7);
    }
}
