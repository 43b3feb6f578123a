//! Fighter builder: the single entry point hosts use to edit a build.
//!
//! A [`FighterBuilder`] borrows a [`Catalog`] and owns one [`BuildState`].
//! Every operation is an atomic transition: it either applies fully or
//! returns an error and leaves the state untouched. Costs are never stored;
//! [`FighterBuilder::summary`] reprices the whole build on each call.
//!
//! # Rejections
//!
//! - Unknown ids are refused with [`BuildError::UnknownId`].
//! - Power and leader ability selections past their limits are refused
//!   with [`BuildError::SelectionLimitReached`].
//! - Out-of-range stat values are clamped, not refused; the returned
//!   [`StatChange`] reports it.

use std::collections::BTreeMap;

use crate::budget::PointsCap;
use crate::catalog::Catalog;
use crate::error::{BuildError, ItemKind, Result};
use crate::pricing::{self, CostBreakdown, LineItem};
use crate::psychic::PsychicMode;
use crate::selection::{SelectionSet, Toggle};
use crate::sheet::LoadoutSheet;
use crate::stats::{StatChange, StatLedger};

/// Everything a user has chosen for one fighter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildState {
    /// Current stat values.
    pub stats: StatLedger,
    /// Active psychic mode.
    pub psychic_mode: PsychicMode,
    /// Chosen psychic power names.
    pub powers: SelectionSet,
    /// Selected weapon ids.
    pub weapons: SelectionSet,
    /// Displayed profile index per weapon id.
    pub weapon_profiles: BTreeMap<String, usize>,
    /// Selected equipment ids.
    pub equipment: SelectionSet,
    /// Selected fighter ability ids.
    pub abilities: SelectionSet,
    /// Selected leader ability ids.
    pub leader_abilities: SelectionSet,
    /// Points cap.
    pub points_cap: PointsCap,
}

impl BuildState {
    /// Fresh build: stats at baseline, nothing selected, default cap.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            stats: StatLedger::at_baseline(catalog),
            psychic_mode: PsychicMode::None,
            powers: SelectionSet::new(),
            weapons: SelectionSet::new(),
            weapon_profiles: BTreeMap::new(),
            equipment: SelectionSet::new(),
            abilities: SelectionSet::new(),
            leader_abilities: SelectionSet::new(),
            points_cap: PointsCap::new(catalog.rules().default_points_cap),
        }
    }

    /// Profile index shown for a weapon (0 when never chosen).
    #[must_use]
    pub fn profile_choice(&self, weapon_id: &str) -> usize {
        self.weapon_profiles.get(weapon_id).copied().unwrap_or(0)
    }
}

/// Editable fighter build bound to a reference catalog.
#[derive(Debug, Clone)]
pub struct FighterBuilder<'c> {
    catalog: &'c Catalog,
    state: BuildState,
}

impl<'c> FighterBuilder<'c> {
    /// Start a fresh build.
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            state: BuildState::new(catalog),
        }
    }

    /// Resume editing an existing state.
    #[must_use]
    pub fn from_state(catalog: &'c Catalog, state: BuildState) -> Self {
        Self { catalog, state }
    }

    /// The catalog this build prices against.
    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Current build state.
    #[must_use]
    pub fn state(&self) -> &BuildState {
        &self.state
    }

    /// Give up the builder, keeping its state.
    #[must_use]
    pub fn into_state(self) -> BuildState {
        self.state
    }

    /// Return to a fresh build.
    pub fn reset(&mut self) {
        self.state = BuildState::new(self.catalog);
        tracing::debug!("Build reset");
    }

    /// Set a stat, clamping the value into its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownId`] if the catalog has no such stat.
    pub fn set_stat(&mut self, name: &str, value: i32) -> Result<StatChange> {
        let stat = self
            .catalog
            .stat(name)
            .ok_or_else(|| BuildError::unknown(ItemKind::Stat, name))?;

        let (applied, clamped) = self.state.stats.set(stat, value);
        if clamped {
            tracing::warn!(
                stat = name,
                requested = value,
                applied,
                "Stat value out of range, clamped"
            );
        } else {
            tracing::debug!(stat = name, value = applied, "Stat set");
        }

        Ok(StatChange {
            requested: value,
            applied,
            clamped,
            ledger_cost: self.state.stats.total_cost(self.catalog),
        })
    }

    /// Step a stat up or down from its current value.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownId`] if the catalog has no such stat.
    pub fn adjust_stat(&mut self, name: &str, delta: i32) -> Result<StatChange> {
        let stat = self
            .catalog
            .stat(name)
            .ok_or_else(|| BuildError::unknown(ItemKind::Stat, name))?;
        let current = self.state.stats.value_of(stat);
        self.set_stat(name, current.saturating_add(delta))
    }

    /// Switch psychic mode.
    ///
    /// Changing to a different mode clears the chosen powers. Returns
    /// whether any powers were cleared.
    pub fn set_psychic_mode(&mut self, mode: PsychicMode) -> bool {
        if self.state.psychic_mode == mode {
            return false;
        }
        let cleared = !self.state.powers.is_empty();
        self.state.psychic_mode = mode;
        self.state.powers.clear();
        tracing::debug!(mode = mode.display_name(), cleared, "Psychic mode changed");
        cleared
    }

    /// Toggle a psychic power.
    ///
    /// # Errors
    ///
    /// - [`BuildError::UnknownId`] if the power is not in the catalog.
    /// - [`BuildError::PsychicModeInactive`] if the fighter is not psychic.
    /// - [`BuildError::SelectionLimitReached`] if the mode's power limit is
    ///   already used up.
    pub fn toggle_power(&mut self, name: &str) -> Result<Toggle> {
        if self.catalog.power(name).is_none() {
            return Err(BuildError::unknown(ItemKind::Power, name));
        }
        if !self.state.psychic_mode.is_psychic() {
            return Err(BuildError::PsychicModeInactive);
        }

        let limit = self.state.psychic_mode.power_limit(self.catalog.rules());
        let toggle = self
            .state
            .powers
            .toggle_within(name, limit)
            .ok_or(BuildError::SelectionLimitReached {
                kind: ItemKind::Power,
                limit,
            })?;
        tracing::debug!(power = name, ?toggle, "Power toggled");
        Ok(toggle)
    }

    /// Toggle a weapon.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownId`] if the weapon is not in the catalog.
    pub fn toggle_weapon(&mut self, id: &str) -> Result<Toggle> {
        if self.catalog.weapon(id).is_none() {
            return Err(BuildError::unknown(ItemKind::Weapon, id));
        }
        let toggle = self.state.weapons.toggle(id);
        tracing::debug!(weapon = id, ?toggle, "Weapon toggled");
        Ok(toggle)
    }

    /// Choose which profile of a weapon is shown. Never affects cost.
    ///
    /// The index is clamped to the weapon's profiles; the applied index is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownId`] if the weapon is not in the catalog.
    pub fn set_weapon_profile(&mut self, id: &str, index: usize) -> Result<usize> {
        let weapon = self
            .catalog
            .weapon(id)
            .ok_or_else(|| BuildError::unknown(ItemKind::Weapon, id))?;
        let applied = weapon.clamp_profile(index);
        self.state.weapon_profiles.insert(id.to_string(), applied);
        tracing::debug!(weapon = id, profile = applied, "Weapon profile chosen");
        Ok(applied)
    }

    /// Toggle an equipment item.
    ///
    /// `only_one` items are not restricted here; that rule spans a roster.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownId`] if the item is not in the catalog.
    pub fn toggle_equipment(&mut self, id: &str) -> Result<Toggle> {
        if self.catalog.equipment(id).is_none() {
            return Err(BuildError::unknown(ItemKind::Equipment, id));
        }
        let toggle = self.state.equipment.toggle(id);
        tracing::debug!(equipment = id, ?toggle, "Equipment toggled");
        Ok(toggle)
    }

    /// Toggle a fighter ability.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownId`] if the ability is not in the catalog.
    pub fn toggle_fighter_ability(&mut self, id: &str) -> Result<Toggle> {
        if self.catalog.ability(id).is_none() {
            return Err(BuildError::unknown(ItemKind::Ability, id));
        }
        let toggle = self.state.abilities.toggle(id);
        tracing::debug!(ability = id, ?toggle, "Fighter ability toggled");
        Ok(toggle)
    }

    /// Toggle a leader ability.
    ///
    /// # Errors
    ///
    /// - [`BuildError::UnknownId`] if the ability is not in the catalog.
    /// - [`BuildError::SelectionLimitReached`] if the leader ability limit
    ///   is already used up.
    pub fn toggle_leader_ability(&mut self, id: &str) -> Result<Toggle> {
        if self.catalog.leader_ability(id).is_none() {
            return Err(BuildError::unknown(ItemKind::LeaderAbility, id));
        }
        let limit = self.catalog.rules().leader_ability_limit;
        let toggle = self
            .state
            .leader_abilities
            .toggle_within(id, limit)
            .ok_or(BuildError::SelectionLimitReached {
                kind: ItemKind::LeaderAbility,
                limit,
            })?;
        tracing::debug!(leader_ability = id, ?toggle, "Leader ability toggled");
        Ok(toggle)
    }

    /// Change the points cap.
    pub fn set_points_cap(&mut self, points: i32) {
        self.state.points_cap = PointsCap::new(points);
        tracing::debug!(points, "Points cap set");
    }

    /// Reprice the whole build.
    #[must_use]
    pub fn summary(&self) -> CostBreakdown {
        pricing::price(self.catalog, &self.state)
    }

    /// Itemized costs of the current selections.
    #[must_use]
    pub fn line_items(&self) -> Vec<LineItem> {
        pricing::line_items(self.catalog, &self.state)
    }

    /// What an equipment item costs this fighter right now.
    #[must_use]
    pub fn equipment_cost(&self, id: &str) -> Option<i32> {
        let item = self.catalog.equipment(id)?;
        let base = pricing::base_and_stats(self.catalog, &self.state.stats);
        Some(pricing::equipment_cost(item, base))
    }

    /// What a fighter ability costs this fighter right now.
    #[must_use]
    pub fn ability_cost(&self, id: &str) -> Option<i32> {
        let ability = self.catalog.ability(id)?;
        let hp = pricing::current_hp(self.catalog, &self.state.stats);
        Some(pricing::ability_cost(ability, hp))
    }

    /// Reference sheet for the current build.
    #[must_use]
    pub fn sheet(&self) -> LoadoutSheet<'_> {
        LoadoutSheet::new(self.catalog, &self.state)
    }
}
