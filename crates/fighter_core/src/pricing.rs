//! Point-cost computation.
//!
//! Every function here is pure: the cost of a build is recomputed from
//! the catalog and the build state on each call. No partial sums are
//! cached between calls, so a cost can never go stale when HP or any
//! other stat changes after an item was picked.
//!
//! Ids in a [`BuildState`] that the catalog does not know contribute zero
//! points and are logged at `warn`.

use serde::Serialize;

use crate::budget::PointsCap;
use crate::builder::BuildState;
use crate::catalog::Catalog;
use crate::data::{AbilityCost, AbilityData, EquipmentCost, EquipmentData};
use crate::error::ItemKind;
use crate::math::{ceil_percent, saturate};
use crate::stats::StatLedger;

/// Full cost breakdown of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    /// Base allowance plus all stat deltas.
    pub base_and_stats: i32,
    /// Psyker / Master Psyker surcharge.
    pub psychic_surcharge: i32,
    /// Sum of selected weapon costs.
    pub weapons_total: i32,
    /// Sum of selected equipment costs.
    pub equipment_total: i32,
    /// Sum of selected fighter ability costs.
    pub abilities_total: i32,
    /// Grand total.
    pub total: i32,
    /// Cap the total was checked against.
    pub points_cap: PointsCap,
    /// Whether `total` exceeds `points_cap`.
    pub over_cap: bool,
}

impl CostBreakdown {
    /// Points left under the cap (negative when over).
    #[must_use]
    pub const fn remaining(&self) -> i32 {
        self.points_cap.remaining(self.total)
    }

    /// Points over the cap (zero or negative when under).
    #[must_use]
    pub const fn excess(&self) -> i32 {
        self.points_cap.excess(self.total)
    }
}

/// One priced selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Collection the item belongs to.
    pub kind: ItemKind,
    /// Catalog id.
    pub id: String,
    /// Display name (the id when unknown).
    pub name: String,
    /// Current cost.
    pub cost: i32,
}

/// Base allowance plus the stat ledger's cost, saturating at the `i32` bounds.
#[must_use]
pub fn base_and_stats(catalog: &Catalog, stats: &StatLedger) -> i32 {
    saturate(i64::from(catalog.rules().base_cost) + stats.total_cost_wide(catalog))
}

/// Current value of the stat HP-based costs follow (0 if undefined).
#[must_use]
pub fn current_hp(catalog: &Catalog, stats: &StatLedger) -> i32 {
    catalog
        .stat(&catalog.rules().hp_stat)
        .map_or(0, |hp| stats.value_of(hp))
}

/// Cost of one equipment item for a fighter with the given Base+Stats.
#[must_use]
pub fn equipment_cost(item: &EquipmentData, base_and_stats: i32) -> i32 {
    match item.cost {
        EquipmentCost::Flat(points) => points,
        EquipmentCost::Percent(percent) => ceil_percent(base_and_stats, percent),
    }
}

/// Cost of one fighter ability for a fighter with the given HP.
#[must_use]
pub fn ability_cost(ability: &AbilityData, hp: i32) -> i32 {
    match ability.cost {
        AbilityCost::Flat(points) => points,
        AbilityCost::PercentHp(percent) => ceil_percent(hp, percent),
        AbilityCost::EqualHp => hp,
    }
}

fn warn_unknown(kind: ItemKind, id: &str) {
    tracing::warn!(kind = kind.label(), id, "Unknown id priced at zero");
}

/// Price every selection of a build, in selection order.
///
/// Weapons first, then equipment, then fighter abilities.
#[must_use]
pub fn line_items(catalog: &Catalog, state: &BuildState) -> Vec<LineItem> {
    let base = base_and_stats(catalog, &state.stats);
    let hp = current_hp(catalog, &state.stats);
    let mut items = Vec::new();

    for id in state.weapons.iter() {
        let (name, cost) = match catalog.weapon(id) {
            Some(weapon) => (weapon.name.clone(), weapon.cost),
            None => {
                warn_unknown(ItemKind::Weapon, id);
                (id.to_string(), 0)
            }
        };
        items.push(LineItem {
            kind: ItemKind::Weapon,
            id: id.to_string(),
            name,
            cost,
        });
    }

    for id in state.equipment.iter() {
        let (name, cost) = match catalog.equipment(id) {
            Some(item) => (item.name.clone(), equipment_cost(item, base)),
            None => {
                warn_unknown(ItemKind::Equipment, id);
                (id.to_string(), 0)
            }
        };
        items.push(LineItem {
            kind: ItemKind::Equipment,
            id: id.to_string(),
            name,
            cost,
        });
    }

    for id in state.abilities.iter() {
        let (name, cost) = match catalog.ability(id) {
            Some(ability) => (ability.name.clone(), ability_cost(ability, hp)),
            None => {
                warn_unknown(ItemKind::Ability, id);
                (id.to_string(), 0)
            }
        };
        items.push(LineItem {
            kind: ItemKind::Ability,
            id: id.to_string(),
            name,
            cost,
        });
    }

    items
}

/// Compute the full cost breakdown of a build from scratch.
#[must_use]
pub fn price(catalog: &Catalog, state: &BuildState) -> CostBreakdown {
    let rules = catalog.rules();
    let base_and_stats = base_and_stats(catalog, &state.stats);
    let psychic_surcharge = state.psychic_mode.surcharge(rules, base_and_stats);

    // Summed wide: an unbounded HP stat can push any part near i32::MAX.
    let mut weapons: i64 = 0;
    let mut equipment: i64 = 0;
    let mut abilities: i64 = 0;
    for item in line_items(catalog, state) {
        let cost = i64::from(item.cost);
        match item.kind {
            ItemKind::Weapon => weapons += cost,
            ItemKind::Equipment => equipment += cost,
            ItemKind::Ability => abilities += cost,
            _ => {}
        }
    }

    let total = saturate(
        i64::from(base_and_stats) + i64::from(psychic_surcharge) + weapons + equipment + abilities,
    );
    let weapons_total = saturate(weapons);
    let equipment_total = saturate(equipment);
    let abilities_total = saturate(abilities);

    CostBreakdown {
        base_and_stats,
        psychic_surcharge,
        weapons_total,
        equipment_total,
        abilities_total,
        total,
        points_cap: state.points_cap,
        over_cap: state.points_cap.is_exceeded_by(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equipment(cost: EquipmentCost) -> EquipmentData {
        EquipmentData {
            id: "eq:test".to_string(),
            name: "Test".to_string(),
            only_one: false,
            cost,
            rules: vec![],
        }
    }

    fn ability(cost: AbilityCost) -> AbilityData {
        AbilityData {
            id: "fa:test".to_string(),
            name: "Test".to_string(),
            cost,
            rules: vec![],
        }
    }

    #[test]
    fn test_flat_equipment_ignores_base() {
        let item = equipment(EquipmentCost::Flat(4));
        assert_eq!(equipment_cost(&item, 16), 4);
        assert_eq!(equipment_cost(&item, 100), 4);
    }

    #[test]
    fn test_percent_equipment_rounds_up() {
        let item = equipment(EquipmentCost::Percent(50));
        assert_eq!(equipment_cost(&item, 20), 10);
        assert_eq!(equipment_cost(&item, 21), 11);

        // 16 * 0.33 = 5.28
        let jump = equipment(EquipmentCost::Percent(33));
        assert_eq!(equipment_cost(&jump, 16), 6);
    }

    #[test]
    fn test_ability_costs() {
        assert_eq!(ability_cost(&ability(AbilityCost::Flat(4)), 7), 4);
        assert_eq!(ability_cost(&ability(AbilityCost::EqualHp), 7), 7);
        assert_eq!(ability_cost(&ability(AbilityCost::EqualHp), 12), 12);
        // 7 * 0.33 = 2.31
        assert_eq!(ability_cost(&ability(AbilityCost::PercentHp(33)), 7), 3);
        // 10 * 0.33 = 3.3
        assert_eq!(ability_cost(&ability(AbilityCost::PercentHp(33)), 10), 4);
    }
}
