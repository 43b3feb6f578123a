//! Tests for catalog loading and validation.
//!
//! Loads the shipped standard catalog and checks its pricing against
//! hand-worked builds, then feeds broken files through the loader.

use std::io::Write;
use std::path::Path;

use fighter_core::prelude::*;
use fighter_tools::loader::{load_catalog_from_file, DataLoadError};
use fighter_tools::validate::{validate_data_path, validate_catalog_file};
use tempfile::{tempdir, NamedTempFile};

/// Helper to load the standard catalog from the assets directory.
fn load_standard_catalog() -> Catalog {
    // Try multiple paths (running from workspace root or crate directory)
    let paths = [
        Path::new("assets/data/catalog.ron"),
        Path::new("../../assets/data/catalog.ron"),
    ];

    for path in &paths {
        if path.exists() {
            match load_catalog_from_file(path) {
                Ok(catalog) => return catalog,
                Err(e) => panic!("Failed to load {}: {e}", path.display()),
            }
        }
    }

    panic!("Could not find the standard catalog. Tried: {paths:?}");
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

const MINIMAL: &str = r#"CatalogData(
    stats: [StatData(name: "HP", base: 7, min: 3, up_cost: 1, down_cost: 1)],
)"#;

// ==========================================================================
// Standard catalog
// ==========================================================================

#[test]
fn test_standard_catalog_counts() {
    let catalog = load_standard_catalog();
    assert_eq!(catalog.stats().count(), 7);
    assert_eq!(catalog.powers().count(), 8);
    assert_eq!(catalog.weapons().count(), 63);
    assert_eq!(catalog.all_equipment().count(), 32);
    assert_eq!(catalog.abilities().count(), 32);
    assert_eq!(catalog.leader_abilities().count(), 19);
}

#[test]
fn test_standard_catalog_rules() {
    let catalog = load_standard_catalog();
    let rules = catalog.rules();
    assert_eq!(rules.base_cost, 16);
    assert_eq!(rules.default_points_cap, 375);
    assert_eq!(rules.psyker.power_limit, 2);
    assert_eq!(rules.master_psyker.power_limit, 3);
    assert_eq!(rules.leader_ability_limit, 2);
}

#[test]
fn test_standard_stat_block() {
    let catalog = load_standard_catalog();
    let def = catalog.stat("DEF").expect("DEF defined");
    assert!(def.reverse);
    assert_eq!(def.display(def.base), "9+");

    let hp = catalog.stat("HP").expect("HP defined");
    assert_eq!(hp.max, None);

    let mv = catalog.stat("Move").expect("Move defined");
    assert_eq!(mv.display(mv.base), "6\"");
}

#[test]
fn test_weapon_categories_in_order() {
    let catalog = load_standard_catalog();
    let counts: Vec<usize> = WeaponCategory::ALL
        .iter()
        .map(|category| catalog.weapons_in(*category).count())
        .collect();
    assert_eq!(counts, [16, 13, 10, 10, 14]);

    let plasma = catalog.weapon("p:plasma-pistol").expect("plasma pistol");
    assert!(plasma.has_variants());
    assert_eq!(plasma.profiles[1].label, "Supercharged");
}

#[test]
fn test_percent_items_in_standard_catalog() {
    let catalog = load_standard_catalog();
    assert_eq!(
        catalog.equipment("eq:blink-pack").map(|e| e.cost),
        Some(EquipmentCost::Percent(50))
    );
    assert_eq!(
        catalog.equipment("eq:jump-pack").map(|e| e.cost),
        Some(EquipmentCost::Percent(33))
    );
    assert_eq!(
        catalog.ability("fa:endless-horde").map(|a| a.cost),
        Some(AbilityCost::EqualHp)
    );
    assert_eq!(
        catalog.ability("fa:extremely-resilient").map(|a| a.cost),
        Some(AbilityCost::PercentHp(33))
    );
}

#[test]
fn test_standard_build_pricing() {
    let catalog = load_standard_catalog();
    let mut builder = FighterBuilder::new(&catalog);

    builder.set_stat("HP", 9).expect("HP");
    builder.set_stat("Shoot", 5).expect("Shoot");
    // 16 + 2 + 4
    assert_eq!(builder.summary().base_and_stats, 22);

    builder.set_psychic_mode(PsychicMode::Psyker);
    builder.toggle_power("Shield").expect("power");
    builder.toggle_weapon("p:plasma-pistol").expect("weapon");
    builder.toggle_weapon("cc:chainsword").expect("weapon");
    builder.toggle_equipment("eq:medipack").expect("equipment");
    builder.toggle_equipment("eq:jump-pack").expect("equipment");
    builder.toggle_fighter_ability("fa:endless-horde").expect("ability");

    let summary = builder.summary();
    assert_eq!(summary.psychic_surcharge, 11);
    assert_eq!(summary.weapons_total, 11);
    // 4 + ceil(22 * 0.33)
    assert_eq!(summary.equipment_total, 12);
    assert_eq!(summary.abilities_total, 9);
    assert_eq!(summary.total, 65);
    assert!(!summary.over_cap);
}

#[test]
fn test_standard_catalog_with_huge_hp() {
    let catalog = load_standard_catalog();
    let mut builder = FighterBuilder::new(&catalog);
    builder.set_stat("HP", 2_000_000_000).expect("HP");
    builder.toggle_fighter_ability("fa:endless-horde").expect("ability");

    let summary = builder.summary();
    assert_eq!(summary.base_and_stats, 2_000_000_009);
    assert_eq!(summary.abilities_total, 2_000_000_000);
    assert_eq!(summary.total, i32::MAX);
    assert!(summary.over_cap);

    builder.set_stat("HP", i32::MAX).expect("HP");
    assert_eq!(builder.summary().base_and_stats, i32::MAX);
}

// ==========================================================================
// Loader failures
// ==========================================================================

#[test]
fn test_load_minimal_file() {
    let file = write_temp(MINIMAL);
    let catalog = load_catalog_from_file(file.path()).expect("minimal catalog loads");
    assert_eq!(catalog.stats().count(), 1);
    assert_eq!(catalog.rules().base_cost, 16);
}

#[test]
fn test_malformed_ron_is_parse_error() {
    let file = write_temp("CatalogData(stats: [StatData(name: \"HP\"");
    let err = load_catalog_from_file(file.path()).expect_err("malformed");
    assert!(matches!(err, DataLoadError::ParseError { .. }));
}

#[test]
fn test_inconsistent_catalog_is_validation_error() {
    let file = write_temp(
        r#"CatalogData(
            stats: [StatData(name: "HP", base: 2, min: 3, up_cost: 1, down_cost: 1)],
            weapons: [
                WeaponData(id: "cc:knife", category: CloseCombat, name: "Knife", cost: 1, profiles: []),
            ],
        )"#,
    );
    let err = load_catalog_from_file(file.path()).expect_err("invalid");
    match err {
        DataLoadError::ValidationError { errors, .. } => {
            assert_eq!(errors.len(), 2, "{errors:?}");
            assert!(errors.iter().any(|e| e.contains("cc:knife")));
            assert!(errors.iter().any(|e| e.contains("baseline")));
        }
        other => panic!("expected validation error, got {other}"),
    }
}

// ==========================================================================
// Validation
// ==========================================================================

#[test]
fn test_validate_file_reports_counts() {
    let file = write_temp(MINIMAL);
    let counts = validate_catalog_file(file.path()).expect("valid");
    assert_eq!(counts.stats, 1);
    assert_eq!(counts.weapons, 0);
}

#[test]
fn test_validate_directory() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("a.ron"), MINIMAL).expect("write");
    std::fs::write(dir.path().join("b.ron"), MINIMAL).expect("write");
    std::fs::write(dir.path().join("notes.txt"), "not a catalog").expect("write");

    let results = validate_data_path(dir.path()).expect("all valid");
    assert_eq!(results.len(), 2);
    assert!(results[0].path.ends_with("a.ron"));

    std::fs::write(dir.path().join("c.ron"), "CatalogData(").expect("write");
    assert!(validate_data_path(dir.path()).is_err());
}
