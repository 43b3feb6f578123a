//! Printable loadout reference sheet.

use std::fmt;

use crate::builder::BuildState;
use crate::catalog::Catalog;
use crate::pricing;

/// Plain-text summary of a build for use at the table.
///
/// Lists formatted stats, the psychic mode with its powers, every selected
/// item with its rules text and live cost, and the total against the cap.
/// Ids the catalog does not know are skipped.
#[derive(Debug, Clone, Copy)]
pub struct LoadoutSheet<'a> {
    catalog: &'a Catalog,
    state: &'a BuildState,
}

impl<'a> LoadoutSheet<'a> {
    /// Create a sheet for a build.
    #[must_use]
    pub fn new(catalog: &'a Catalog, state: &'a BuildState) -> Self {
        Self { catalog, state }
    }

    fn write_stats(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats: Vec<String> = self
            .catalog
            .stats()
            .map(|stat| {
                let value = self.state.stats.value_of(stat);
                format!("{} {}", stat.name, stat.display(value))
            })
            .collect();
        writeln!(f, "Stats: {}", stats.join(" | "))
    }

    fn write_psychic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = self.state.psychic_mode;
        if !mode.is_psychic() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "Psychic: {}", mode.display_name())?;
        for name in self.state.powers.iter() {
            if let Some(power) = self.catalog.power(name) {
                writeln!(
                    f,
                    "  {} (Range {}, Test {}): {}",
                    power.name, power.range, power.test, power.effect
                )?;
            }
        }
        Ok(())
    }

    fn write_weapons(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.weapons.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "Weapons:")?;
        for id in self.state.weapons.iter() {
            let Some(weapon) = self.catalog.weapon(id) else {
                continue;
            };
            let Some(profile) = weapon.profile(self.state.profile_choice(id)) else {
                continue;
            };
            let label = if weapon.has_variants() {
                format!(" [{}]", profile.label)
            } else {
                String::new()
            };
            writeln!(
                f,
                "  {}{} ({} pts): ATK {}, Hit {}, DMG {}, Special {}",
                weapon.name,
                label,
                weapon.cost,
                profile.attacks,
                profile.hit,
                profile.damage,
                profile.special_text()
            )?;
        }
        Ok(())
    }

    fn write_equipment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.equipment.is_empty() {
            return Ok(());
        }
        let base = pricing::base_and_stats(self.catalog, &self.state.stats);
        writeln!(f)?;
        writeln!(f, "Equipment:")?;
        for id in self.state.equipment.iter() {
            if let Some(item) = self.catalog.equipment(id) {
                let cost = pricing::equipment_cost(item, base);
                writeln!(f, "  {} ({cost} pts)", item.name)?;
                write_rules(f, &item.rules)?;
            }
        }
        Ok(())
    }

    fn write_abilities(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.abilities.is_empty() {
            return Ok(());
        }
        let hp = pricing::current_hp(self.catalog, &self.state.stats);
        writeln!(f)?;
        writeln!(f, "Fighter Abilities:")?;
        for id in self.state.abilities.iter() {
            if let Some(ability) = self.catalog.ability(id) {
                let cost = pricing::ability_cost(ability, hp);
                writeln!(f, "  {} ({cost} pts)", ability.name)?;
                write_rules(f, &ability.rules)?;
            }
        }
        Ok(())
    }

    fn write_leader_abilities(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.leader_abilities.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "Leader Abilities:")?;
        for id in self.state.leader_abilities.iter() {
            if let Some(ability) = self.catalog.leader_ability(id) {
                writeln!(f, "  {}", ability.name)?;
                write_rules(f, &ability.rules)?;
            }
        }
        Ok(())
    }
}

fn write_rules(f: &mut fmt::Formatter<'_>, rules: &[String]) -> fmt::Result {
    for line in rules {
        writeln!(f, "    - {line}")?;
    }
    Ok(())
}

impl fmt::Display for LoadoutSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = pricing::price(self.catalog, self.state);

        writeln!(f, "Fighter Loadout")?;
        writeln!(f, "===============")?;
        self.write_stats(f)?;
        self.write_psychic(f)?;
        self.write_weapons(f)?;
        self.write_equipment(f)?;
        self.write_abilities(f)?;
        self.write_leader_abilities(f)?;
        writeln!(f)?;
        write!(f, "Total: {} / {} pts", summary.total, summary.points_cap)?;
        if summary.over_cap {
            write!(f, " (over cap by {})", summary.excess())?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FighterBuilder;
    use crate::data::{
        CatalogData, EquipmentCost, EquipmentData, LeaderAbilityData, PowerData, StatData,
        StatFormat, WeaponCategory, WeaponData, WeaponProfile,
    };
    use crate::psychic::PsychicMode;

    fn profile(label: &str, damage: &str, special: &[&str]) -> WeaponProfile {
        WeaponProfile {
            label: label.to_string(),
            attacks: "4".to_string(),
            hit: "User".to_string(),
            damage: damage.to_string(),
            special: special.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn create_test_catalog() -> Catalog {
        Catalog::new(CatalogData {
            stats: vec![
                StatData {
                    name: "Move".to_string(),
                    base: 6,
                    min: 5,
                    max: Some(8),
                    up_cost: 4,
                    down_cost: 4,
                    reverse: false,
                    format: StatFormat::Inches,
                },
                StatData {
                    name: "HP".to_string(),
                    base: 7,
                    min: 3,
                    max: None,
                    up_cost: 1,
                    down_cost: 1,
                    reverse: false,
                    format: StatFormat::Plain,
                },
            ],
            powers: vec![PowerData {
                name: "Shield".to_string(),
                range: "Self".to_string(),
                test: "4+".to_string(),
                effect: "Gain a save.".to_string(),
            }],
            weapons: vec![WeaponData {
                id: "p:plasma-pistol".to_string(),
                category: WeaponCategory::Pistol,
                name: "Plasma Pistol".to_string(),
                cost: 7,
                profiles: vec![
                    profile("Std", "5/6", &[]),
                    profile("Supercharged", "6/6", &["Risky"]),
                ],
            }],
            equipment: vec![EquipmentData {
                id: "eq:blink-pack".to_string(),
                name: "Blink Pack".to_string(),
                only_one: true,
                cost: EquipmentCost::Percent(50),
                rules: vec!["Teleport instead of moving.".to_string()],
            }],
            leader_abilities: vec![LeaderAbilityData {
                id: "lead:tactician".to_string(),
                name: "Tactician".to_string(),
                rules: vec!["Re-roll initiative.".to_string()],
            }],
            ..CatalogData::default()
        })
        .expect("valid catalog")
    }

    #[test]
    fn test_sheet_lists_selections() {
        let catalog = create_test_catalog();
        let mut builder = FighterBuilder::new(&catalog);
        builder.set_psychic_mode(PsychicMode::Psyker);
        builder.toggle_power("Shield").expect("psyker");
        builder.toggle_weapon("p:plasma-pistol").expect("known");
        builder.set_weapon_profile("p:plasma-pistol", 1).expect("known");
        builder.toggle_equipment("eq:blink-pack").expect("known");
        builder.toggle_leader_ability("lead:tactician").expect("known");

        let text = builder.sheet().to_string();
        assert!(text.contains("Stats: Move 6\" | HP 7"));
        assert!(text.contains("Psychic: Psyker"));
        assert!(text.contains("Shield (Range Self, Test 4+): Gain a save."));
        assert!(text.contains(
            "Plasma Pistol [Supercharged] (7 pts): ATK 4, Hit User, DMG 6/6, Special Risky"
        ));
        assert!(text.contains("Blink Pack (8 pts)"));
        assert!(text.contains("    - Teleport instead of moving."));
        assert!(text.contains("Tactician"));
        // 16 + 8 psyker + 7 weapon + 8 equipment
        assert!(text.contains("Total: 39 / 375 pts"));
        assert!(!text.contains("over cap"));
    }

    #[test]
    fn test_sheet_flags_over_cap() {
        let catalog = create_test_catalog();
        let mut builder = FighterBuilder::new(&catalog);
        builder.set_points_cap(10);
        let text = builder.sheet().to_string();
        assert!(text.contains("Total: 16 / 10 pts (over cap by 6)"));
        assert!(!text.contains("Psychic:"));
        assert!(!text.contains("Weapons:"));
    }

    #[test]
    fn test_sheet_with_lowest_cap() {
        let catalog = create_test_catalog();
        let mut builder = FighterBuilder::new(&catalog);
        builder.set_points_cap(i32::MIN);
        let text = builder.sheet().to_string();
        assert!(text.contains(&format!("(over cap by {})", i32::MAX)));
    }
}
