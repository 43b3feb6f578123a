//! Reference catalog data combining every definition the builder prices.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ability_data::{AbilityCost, AbilityData, LeaderAbilityData};
use super::equipment_data::{EquipmentCost, EquipmentData};
use super::power_data::PowerData;
use super::stat_data::StatData;
use super::weapon_data::WeaponData;

/// Surcharge and power allowance for one psychic tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychicTier {
    /// Whole percent of Base+Stats added to the fighter's cost.
    pub surcharge_percent: u32,

    /// Number of powers the fighter may choose.
    pub power_limit: usize,
}

/// Global pricing constants.
///
/// Every field has a default, so a catalog may omit the section entirely.
///
/// # Example RON
///
/// ```ron
/// PricingRules(
///     base_cost: 16,
///     default_points_cap: 375,
///     psyker: PsychicTier(surcharge_percent: 50, power_limit: 2),
///     master_psyker: PsychicTier(surcharge_percent: 66, power_limit: 3),
///     leader_ability_limit: 2,
///     hp_stat: "HP",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Fixed allowance every fighter starts from.
    #[serde(default = "default_base_cost")]
    pub base_cost: i32,

    /// Points cap a new build starts with.
    #[serde(default = "default_points_cap")]
    pub default_points_cap: i32,

    /// Psyker tier.
    #[serde(default = "default_psyker")]
    pub psyker: PsychicTier,

    /// Master Psyker tier.
    #[serde(default = "default_master_psyker")]
    pub master_psyker: PsychicTier,

    /// Maximum concurrently selected leader abilities.
    #[serde(default = "default_leader_ability_limit")]
    pub leader_ability_limit: usize,

    /// Name of the stat that HP-based ability costs follow.
    #[serde(default = "default_hp_stat")]
    pub hp_stat: String,
}

/// Default base allowance.
const fn default_base_cost() -> i32 {
    16
}

/// Default points cap.
const fn default_points_cap() -> i32 {
    375
}

/// Default Psyker tier: +50%, two powers.
const fn default_psyker() -> PsychicTier {
    PsychicTier {
        surcharge_percent: 50,
        power_limit: 2,
    }
}

/// Default Master Psyker tier: +66%, three powers.
const fn default_master_psyker() -> PsychicTier {
    PsychicTier {
        surcharge_percent: 66,
        power_limit: 3,
    }
}

/// Default leader ability limit.
const fn default_leader_ability_limit() -> usize {
    2
}

/// Default HP stat name.
fn default_hp_stat() -> String {
    "HP".to_string()
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            base_cost: default_base_cost(),
            default_points_cap: default_points_cap(),
            psyker: default_psyker(),
            master_psyker: default_master_psyker(),
            leader_ability_limit: default_leader_ability_limit(),
            hp_stat: default_hp_stat(),
        }
    }
}

/// Complete reference catalog definition.
///
/// Loaded once at startup from a RON file and never mutated afterwards.
///
/// # Example RON
///
/// ```ron
/// CatalogData(
///     version: "2025.1",
///     stats: [...],
///     powers: [...],
///     weapons: [...],
///     equipment: [...],
///     abilities: [...],
///     leader_abilities: [...],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Free-form version label of the game content.
    #[serde(default)]
    pub version: String,

    /// Pricing constants.
    #[serde(default)]
    pub rules: PricingRules,

    /// Tunable statistics, in display order.
    pub stats: Vec<StatData>,

    /// Psychic powers.
    #[serde(default)]
    pub powers: Vec<PowerData>,

    /// Weapons across all categories.
    #[serde(default)]
    pub weapons: Vec<WeaponData>,

    /// Equipment items.
    #[serde(default)]
    pub equipment: Vec<EquipmentData>,

    /// Fighter abilities.
    #[serde(default)]
    pub abilities: Vec<AbilityData>,

    /// Leader abilities.
    #[serde(default)]
    pub leader_abilities: Vec<LeaderAbilityData>,
}

/// Record `id` as seen, reporting a duplicate if it already was.
fn check_unique<'a>(
    seen: &mut HashSet<&'a str>,
    errors: &mut Vec<String>,
    kind: &str,
    id: &'a str,
) {
    if !seen.insert(id) {
        errors.push(format!("Duplicate {kind} id '{id}'"));
    }
}

impl CatalogData {
    /// Validate internal consistency of the catalog.
    ///
    /// Checks for:
    /// - Unique identifiers within each collection
    /// - Stat bounds that contain the baseline
    /// - Weapons with at least one profile
    /// - Percentages within 0..=100
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for stat in &self.stats {
            check_unique(&mut seen, &mut errors, "stat", &stat.name);
            if let Some(max) = stat.max {
                if stat.min > max {
                    errors.push(format!(
                        "Stat '{}' has min {} above max {}",
                        stat.name, stat.min, max
                    ));
                }
            }
            if !stat.in_bounds(stat.base) {
                errors.push(format!(
                    "Stat '{}' baseline {} lies outside its bounds",
                    stat.name, stat.base
                ));
            }
            if stat.up_cost < 0 || stat.down_cost < 0 {
                errors.push(format!("Stat '{}' has a negative cost", stat.name));
            }
        }

        if !self.stats.iter().any(|s| s.name == self.rules.hp_stat) {
            errors.push(format!("HP stat '{}' is not defined", self.rules.hp_stat));
        }

        let mut seen = HashSet::new();
        for power in &self.powers {
            check_unique(&mut seen, &mut errors, "power", &power.name);
        }

        let mut seen = HashSet::new();
        for weapon in &self.weapons {
            check_unique(&mut seen, &mut errors, "weapon", &weapon.id);
            if weapon.profiles.is_empty() {
                errors.push(format!("Weapon '{}' has no profiles", weapon.id));
            }
        }

        let mut seen = HashSet::new();
        for item in &self.equipment {
            check_unique(&mut seen, &mut errors, "equipment", &item.id);
            if let EquipmentCost::Percent(percent) = item.cost {
                if percent > 100 {
                    errors.push(format!(
                        "Equipment '{}' percent cost {percent} exceeds 100",
                        item.id
                    ));
                }
            }
        }

        let mut seen = HashSet::new();
        for ability in &self.abilities {
            check_unique(&mut seen, &mut errors, "ability", &ability.id);
            if let AbilityCost::PercentHp(percent) = ability.cost {
                if percent > 100 {
                    errors.push(format!(
                        "Ability '{}' percent cost {percent} exceeds 100",
                        ability.id
                    ));
                }
            }
        }

        let mut seen = HashSet::new();
        for ability in &self.leader_abilities {
            check_unique(&mut seen, &mut errors, "leader ability", &ability.id);
        }

        for (label, tier) in [
            ("Psyker", &self.rules.psyker),
            ("Master Psyker", &self.rules.master_psyker),
        ] {
            if tier.surcharge_percent > 100 {
                errors.push(format!(
                    "{label} surcharge {}% exceeds 100",
                    tier.surcharge_percent
                ));
            }
        }

        errors
    }
}
