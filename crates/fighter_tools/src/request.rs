//! Build requests from command-line arguments.
//!
//! A [`BuildRequest`] lists the edits to make to a fresh build. Applying
//! it drives a [`FighterBuilder`] one operation at a time; operations the
//! builder refuses are collected as [`Rejected`] entries and the rest of
//! the request still applies.
//!
//! Operations apply in a fixed order: stats, psychic mode, powers,
//! weapons, equipment, fighter abilities, leader abilities, then the cap.
//! Naming a selection twice keeps it selected.

use std::str::FromStr;

use fighter_core::builder::FighterBuilder;
use fighter_core::error::{BuildError, ItemKind};
use fighter_core::psychic::PsychicMode;
use serde::Serialize;
use thiserror::Error;

/// Malformed command-line value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The argument does not have the expected shape.
    #[error("Invalid argument '{arg}': expected {expected}")]
    Malformed {
        /// The offending argument.
        arg: String,
        /// Description of the expected form.
        expected: &'static str,
    },
}

/// A `NAME=VALUE` stat assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRequest {
    /// Stat name.
    pub name: String,
    /// Requested value.
    pub value: i32,
}

impl FromStr for StatRequest {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RequestError::Malformed {
            arg: s.to_string(),
            expected: "NAME=VALUE",
        };
        let (name, value) = s.split_once('=').ok_or_else(malformed)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(malformed());
        }
        let value = value.trim().parse().map_err(|_| malformed())?;
        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}

/// A weapon pick, optionally with the profile to show.
///
/// Written `ID` or `ID@PROFILE`, where `PROFILE` is a zero-based index or
/// a profile label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponRequest {
    /// Weapon id.
    pub id: String,
    /// Profile index or label.
    pub profile: Option<String>,
}

impl FromStr for WeaponRequest {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RequestError::Malformed {
            arg: s.to_string(),
            expected: "ID or ID@PROFILE",
        };
        let (id, profile) = match s.split_once('@') {
            Some((id, profile)) if !profile.trim().is_empty() => {
                (id, Some(profile.trim().to_string()))
            }
            Some(_) => return Err(malformed()),
            None => (s, None),
        };
        let id = id.trim();
        if id.is_empty() {
            return Err(malformed());
        }
        Ok(Self {
            id: id.to_string(),
            profile,
        })
    }
}

/// A refused operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejected {
    /// The operation as requested, e.g. `weapon s:plasma-gun`.
    pub request: String,
    /// Why it was refused.
    pub reason: String,
}

/// Edits to apply to a fresh build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRequest {
    /// Stat assignments.
    pub stats: Vec<StatRequest>,
    /// Psychic mode, if set.
    pub psychic: Option<PsychicMode>,
    /// Power names.
    pub powers: Vec<String>,
    /// Weapon picks.
    pub weapons: Vec<WeaponRequest>,
    /// Equipment ids.
    pub equipment: Vec<String>,
    /// Fighter ability ids.
    pub abilities: Vec<String>,
    /// Leader ability ids.
    pub leaders: Vec<String>,
    /// Points cap override.
    pub cap: Option<i32>,
}

impl BuildRequest {
    /// Apply every operation to `builder`, returning the refused ones.
    pub fn apply(&self, builder: &mut FighterBuilder<'_>) -> Vec<Rejected> {
        let mut rejected = Vec::new();
        let mut record = |request: String, result: Result<(), BuildError>| {
            if let Err(error) = result {
                tracing::warn!(%request, %error, "Operation rejected");
                rejected.push(Rejected {
                    request,
                    reason: error.to_string(),
                });
            }
        };

        for stat in &self.stats {
            let result = builder.set_stat(&stat.name, stat.value).map(|_| ());
            record(format!("stat {}={}", stat.name, stat.value), result);
        }

        if let Some(mode) = self.psychic {
            builder.set_psychic_mode(mode);
        }

        for name in &self.powers {
            if builder.state().powers.contains(name) {
                continue;
            }
            let result = builder.toggle_power(name).map(|_| ());
            record(format!("power {name}"), result);
        }

        for weapon in &self.weapons {
            let result = apply_weapon(builder, weapon);
            let request = match &weapon.profile {
                Some(profile) => format!("weapon {}@{profile}", weapon.id),
                None => format!("weapon {}", weapon.id),
            };
            record(request, result);
        }

        for id in &self.equipment {
            if builder.state().equipment.contains(id) {
                continue;
            }
            let result = builder.toggle_equipment(id).map(|_| ());
            record(format!("equipment {id}"), result);
        }

        for id in &self.abilities {
            if builder.state().abilities.contains(id) {
                continue;
            }
            let result = builder.toggle_fighter_ability(id).map(|_| ());
            record(format!("ability {id}"), result);
        }

        for id in &self.leaders {
            if builder.state().leader_abilities.contains(id) {
                continue;
            }
            let result = builder.toggle_leader_ability(id).map(|_| ());
            record(format!("leader {id}"), result);
        }

        if let Some(cap) = self.cap {
            builder.set_points_cap(cap);
        }

        rejected
    }
}

/// Toggle a weapon on, then pick its profile.
fn apply_weapon(
    builder: &mut FighterBuilder<'_>,
    request: &WeaponRequest,
) -> Result<(), BuildError> {
    let weapon = builder
        .catalog()
        .weapon(&request.id)
        .ok_or_else(|| BuildError::unknown(ItemKind::Weapon, &request.id))?;

    let index = match &request.profile {
        None => None,
        Some(profile) => match profile.parse::<usize>() {
            Ok(index) => Some(index),
            Err(_) => Some(
                weapon
                    .profiles
                    .iter()
                    .position(|p| p.label.eq_ignore_ascii_case(profile))
                    .ok_or_else(|| {
                        BuildError::unknown(ItemKind::Weapon, format!("{}@{profile}", request.id))
                    })?,
            ),
        },
    };

    if !builder.state().weapons.contains(&request.id) {
        builder.toggle_weapon(&request.id)?;
    }
    if let Some(index) = index {
        builder.set_weapon_profile(&request.id, index)?;
    }
    Ok(())
}
