//! Indexed, read-only reference catalog.
//!
//! A [`Catalog`] wraps validated [`CatalogData`] with id → definition
//! lookup tables built once at construction. Builders borrow it; nothing
//! mutates it after creation.

use std::collections::HashMap;

use crate::data::{
    AbilityData, CatalogData, EquipmentData, LeaderAbilityData, PowerData, PricingRules,
    StatData, WeaponCategory, WeaponData,
};
use crate::error::{BuildError, Result};

/// Map each key to its position in the source collection.
fn index_by<T>(items: &[T], key: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (key(item).to_string(), i))
        .collect()
}

/// Validated reference catalog with lookup indexes.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
    stats: HashMap<String, usize>,
    powers: HashMap<String, usize>,
    weapons: HashMap<String, usize>,
    equipment: HashMap<String, usize>,
    abilities: HashMap<String, usize>,
    leader_abilities: HashMap<String, usize>,
}

impl Catalog {
    /// Validate catalog data and build its indexes.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidCatalog`] listing every consistency problem.
    pub fn new(data: CatalogData) -> Result<Self> {
        let errors = data.validate();
        if !errors.is_empty() {
            return Err(BuildError::InvalidCatalog(errors));
        }

        Ok(Self {
            stats: index_by(&data.stats, |s| s.name.as_str()),
            powers: index_by(&data.powers, |p| p.name.as_str()),
            weapons: index_by(&data.weapons, |w| w.id.as_str()),
            equipment: index_by(&data.equipment, |e| e.id.as_str()),
            abilities: index_by(&data.abilities, |a| a.id.as_str()),
            leader_abilities: index_by(&data.leader_abilities, |a| a.id.as_str()),
            data,
        })
    }

    /// The underlying catalog data.
    #[must_use]
    pub fn data(&self) -> &CatalogData {
        &self.data
    }

    /// Pricing constants.
    #[must_use]
    pub fn rules(&self) -> &PricingRules {
        &self.data.rules
    }

    /// Content version label.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.data.version
    }

    /// Get a stat definition by name.
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<&StatData> {
        self.stats.get(name).map(|&i| &self.data.stats[i])
    }

    /// Get a psychic power by name.
    #[must_use]
    pub fn power(&self, name: &str) -> Option<&PowerData> {
        self.powers.get(name).map(|&i| &self.data.powers[i])
    }

    /// Get a weapon by ID.
    #[must_use]
    pub fn weapon(&self, id: &str) -> Option<&WeaponData> {
        self.weapons.get(id).map(|&i| &self.data.weapons[i])
    }

    /// Get an equipment item by ID.
    #[must_use]
    pub fn equipment(&self, id: &str) -> Option<&EquipmentData> {
        self.equipment.get(id).map(|&i| &self.data.equipment[i])
    }

    /// Get a fighter ability by ID.
    #[must_use]
    pub fn ability(&self, id: &str) -> Option<&AbilityData> {
        self.abilities.get(id).map(|&i| &self.data.abilities[i])
    }

    /// Get a leader ability by ID.
    #[must_use]
    pub fn leader_ability(&self, id: &str) -> Option<&LeaderAbilityData> {
        self.leader_abilities
            .get(id)
            .map(|&i| &self.data.leader_abilities[i])
    }

    /// All stats in catalog order.
    pub fn stats(&self) -> impl Iterator<Item = &StatData> {
        self.data.stats.iter()
    }

    /// All psychic powers in catalog order.
    pub fn powers(&self) -> impl Iterator<Item = &PowerData> {
        self.data.powers.iter()
    }

    /// All weapons in catalog order.
    pub fn weapons(&self) -> impl Iterator<Item = &WeaponData> {
        self.data.weapons.iter()
    }

    /// Weapons of one category in catalog order.
    pub fn weapons_in(&self, category: WeaponCategory) -> impl Iterator<Item = &WeaponData> {
        self.data
            .weapons
            .iter()
            .filter(move |w| w.category == category)
    }

    /// All equipment in catalog order.
    pub fn all_equipment(&self) -> impl Iterator<Item = &EquipmentData> {
        self.data.equipment.iter()
    }

    /// All fighter abilities in catalog order.
    pub fn abilities(&self) -> impl Iterator<Item = &AbilityData> {
        self.data.abilities.iter()
    }

    /// All leader abilities in catalog order.
    pub fn leader_abilities(&self) -> impl Iterator<Item = &LeaderAbilityData> {
        self.data.leader_abilities.iter()
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = BuildError;

    fn try_from(data: CatalogData) -> Result<Self> {
        Self::new(data)
    }
}
