//! Test fixtures and helpers.
//!
//! A small catalog with the standard stat block and round-number prices,
//! so expected totals can be worked out by hand.

use fighter_core::catalog::Catalog;
use fighter_core::data::{
    AbilityCost, AbilityData, CatalogData, EquipmentCost, EquipmentData, LeaderAbilityData,
    PowerData, PricingRules, StatData, StatFormat, WeaponCategory, WeaponData, WeaponProfile,
};

/// Weapon costing 5 points with a single profile.
pub const BLADE: &str = "cc:test-blade";
/// Weapon costing 10 points with two profiles.
pub const PLASMA: &str = "s:test-plasma";
/// Equipment costing a flat 4 points.
pub const KIT: &str = "eq:test-kit";
/// Equipment costing 50% of Base+Stats.
pub const BLINK_PACK: &str = "eq:test-blink";
/// Equipment costing 33% of Base+Stats.
pub const JUMP_PACK: &str = "eq:test-jump";
/// Ability costing a flat 2 points.
pub const TOUGH: &str = "fa:test-tough";
/// Ability costing the current HP.
pub const HORDE: &str = "fa:test-horde";
/// Ability costing 33% of the current HP.
pub const RESILIENT: &str = "fa:test-resilient";
/// Power names in catalog order.
pub const POWERS: [&str; 4] = ["Shield", "Boost", "Heal", "Curse"];
/// Leader ability ids in catalog order.
pub const LEADERS: [&str; 3] = ["lead:test-a", "lead:test-b", "lead:test-c"];

fn stat(
    name: &str,
    base: i32,
    (min, max): (i32, Option<i32>),
    (up_cost, down_cost): (i32, i32),
    reverse: bool,
    format: StatFormat,
) -> StatData {
    StatData {
        name: name.to_string(),
        base,
        min,
        max,
        up_cost,
        down_cost,
        reverse,
        format,
    }
}

/// The standard seven-stat block.
#[must_use]
pub fn standard_stats() -> Vec<StatData> {
    vec![
        stat("Move", 6, (5, Some(8)), (4, 4), false, StatFormat::Inches),
        stat("DEF", 9, (5, Some(11)), (1, 1), true, StatFormat::Target),
        stat("AP", 2, (2, Some(4)), (4, 4), false, StatFormat::Plain),
        stat("HP", 7, (3, None), (1, 1), false, StatFormat::Plain),
        stat("ATK", 3, (3, Some(5)), (2, 0), false, StatFormat::Plain),
        stat("Fight", 7, (5, Some(11)), (2, 1), true, StatFormat::Target),
        stat("Shoot", 7, (5, Some(11)), (2, 1), true, StatFormat::Target),
    ]
}

fn profile(label: &str) -> WeaponProfile {
    WeaponProfile {
        label: label.to_string(),
        attacks: "User".to_string(),
        hit: "User".to_string(),
        damage: "4/5".to_string(),
        special: vec![],
    }
}

fn equipment(id: &str, cost: EquipmentCost) -> EquipmentData {
    EquipmentData {
        id: id.to_string(),
        name: id.to_string(),
        only_one: false,
        cost,
        rules: vec![],
    }
}

fn ability(id: &str, cost: AbilityCost) -> AbilityData {
    AbilityData {
        id: id.to_string(),
        name: id.to_string(),
        cost,
        rules: vec![],
    }
}

/// Raw data for the fixture catalog.
#[must_use]
pub fn test_catalog_data() -> CatalogData {
    CatalogData {
        version: "test".to_string(),
        rules: PricingRules::default(),
        stats: standard_stats(),
        powers: POWERS
            .iter()
            .map(|name| PowerData {
                name: (*name).to_string(),
                range: "9\"".to_string(),
                test: "4+".to_string(),
                effect: format!("{name} effect."),
            })
            .collect(),
        weapons: vec![
            WeaponData {
                id: BLADE.to_string(),
                category: WeaponCategory::CloseCombat,
                name: "Test Blade".to_string(),
                cost: 5,
                profiles: vec![profile("Std")],
            },
            WeaponData {
                id: PLASMA.to_string(),
                category: WeaponCategory::Special,
                name: "Test Plasma".to_string(),
                cost: 10,
                profiles: vec![profile("Std"), profile("Supercharged")],
            },
        ],
        equipment: vec![
            equipment(KIT, EquipmentCost::Flat(4)),
            equipment(BLINK_PACK, EquipmentCost::Percent(50)),
            equipment(JUMP_PACK, EquipmentCost::Percent(33)),
        ],
        abilities: vec![
            ability(TOUGH, AbilityCost::Flat(2)),
            ability(HORDE, AbilityCost::EqualHp),
            ability(RESILIENT, AbilityCost::PercentHp(33)),
        ],
        leader_abilities: LEADERS
            .iter()
            .map(|id| LeaderAbilityData {
                id: (*id).to_string(),
                name: (*id).to_string(),
                rules: vec![],
            })
            .collect(),
    }
}

/// Validated fixture catalog.
///
/// # Panics
///
/// Panics if the fixture data fails validation.
#[must_use]
pub fn test_catalog() -> Catalog {
    Catalog::new(test_catalog_data()).expect("fixture catalog is valid")
}
