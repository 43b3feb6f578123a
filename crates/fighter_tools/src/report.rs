//! Text and JSON output for the command-line tools.

use clap::ValueEnum;
use fighter_core::builder::FighterBuilder;
use fighter_core::catalog::Catalog;
use fighter_core::data::{AbilityCost, EquipmentCost, WeaponCategory};
use fighter_core::pricing::{CostBreakdown, LineItem};
use serde::Serialize;

use crate::request::Rejected;

/// Catalog collection to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    /// Tunable stats with bounds and step costs.
    Stats,
    /// Psychic powers.
    Powers,
    /// Weapons grouped by category.
    Weapons,
    /// Equipment items.
    Equipment,
    /// Fighter abilities.
    Abilities,
    /// Leader abilities.
    Leaders,
}

/// Everything `price` reports about a build.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Cost totals.
    pub summary: CostBreakdown,
    /// Per-selection costs.
    pub items: Vec<LineItem>,
    /// Operations the builder refused.
    pub rejected: Vec<Rejected>,
}

impl PriceReport {
    /// Gather the report for a finished build.
    #[must_use]
    pub fn new(builder: &FighterBuilder<'_>, rejected: Vec<Rejected>) -> Self {
        Self {
            summary: builder.summary(),
            items: builder.line_items(),
            rejected,
        }
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render as plain text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let s = &self.summary;
        let mut out = String::new();
        for item in &self.items {
            out.push_str(&format!("{:<32} {:>4}\n", item.name, item.cost));
        }
        if !self.items.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("Base + Stats:      {:>4}\n", s.base_and_stats));
        out.push_str(&format!("Psychic:           {:>4}\n", s.psychic_surcharge));
        out.push_str(&format!("Weapons:           {:>4}\n", s.weapons_total));
        out.push_str(&format!("Equipment:         {:>4}\n", s.equipment_total));
        out.push_str(&format!("Fighter Abilities: {:>4}\n", s.abilities_total));
        out.push_str(&format!("Total: {} / {} pts", s.total, s.points_cap));
        if s.over_cap {
            out.push_str(&format!(" (over cap by {})", s.excess()));
        }
        out.push('\n');
        for rejected in &self.rejected {
            out.push_str(&format!("Rejected {}: {}\n", rejected.request, rejected.reason));
        }
        out
    }
}

/// List a catalog collection, pricing items for a fighter at baseline.
#[must_use]
pub fn list_catalog(catalog: &Catalog, listing: Listing) -> String {
    let builder = FighterBuilder::new(catalog);
    let mut out = String::new();

    match listing {
        Listing::Stats => {
            for stat in catalog.stats() {
                let max = stat
                    .max
                    .map_or_else(|| "-".to_string(), |max| stat.display(max));
                out.push_str(&format!(
                    "{:<6} base {:<4} min {:<4} max {:<4} +{}/-{}{}\n",
                    stat.name,
                    stat.display(stat.base),
                    stat.display(stat.min),
                    max,
                    stat.up_cost,
                    stat.down_cost,
                    if stat.reverse { " (lower is better)" } else { "" }
                ));
            }
        }
        Listing::Powers => {
            for power in catalog.powers() {
                out.push_str(&format!(
                    "{} (Range {}, Test {}): {}\n",
                    power.name, power.range, power.test, power.effect
                ));
            }
        }
        Listing::Weapons => {
            for category in WeaponCategory::ALL {
                let mut weapons = catalog.weapons_in(category).peekable();
                if weapons.peek().is_none() {
                    continue;
                }
                out.push_str(&format!("{}\n", category.label()));
                for weapon in weapons {
                    out.push_str(&format!(
                        "  {:<28} {:<32} {:>3}\n",
                        weapon.id, weapon.name, weapon.cost
                    ));
                    for profile in &weapon.profiles {
                        out.push_str(&format!(
                            "      {:<14} ATK {:<5} Hit {:<8} DMG {:<5} {}\n",
                            profile.label,
                            profile.attacks,
                            profile.hit,
                            profile.damage,
                            profile.special_text()
                        ));
                    }
                }
            }
        }
        Listing::Equipment => {
            for item in catalog.all_equipment() {
                let cost = builder.equipment_cost(&item.id).unwrap_or_default();
                let rule = match item.cost {
                    EquipmentCost::Flat(_) => String::new(),
                    EquipmentCost::Percent(percent) => format!(" ({percent}% of Base+Stats)"),
                };
                let only_one = if item.only_one { " [only one]" } else { "" };
                out.push_str(&format!(
                    "  {:<24} {:<28} {cost:>3}{rule}{only_one}\n",
                    item.id, item.name
                ));
            }
        }
        Listing::Abilities => {
            for ability in catalog.abilities() {
                let cost = builder.ability_cost(&ability.id).unwrap_or_default();
                let rule = match ability.cost {
                    AbilityCost::Flat(_) => String::new(),
                    AbilityCost::PercentHp(percent) => format!(" ({percent}% of HP)"),
                    AbilityCost::EqualHp => " (equal to HP)".to_string(),
                };
                out.push_str(&format!(
                    "  {:<28} {:<28} {cost:>3}{rule}\n",
                    ability.id, ability.name
                ));
            }
        }
        Listing::Leaders => {
            for ability in catalog.leader_abilities() {
                out.push_str(&format!("  {:<28} {}\n", ability.id, ability.name));
            }
        }
    }

    out
}
