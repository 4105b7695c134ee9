//! Dataset - the read-only reference data every calculation runs against

mod modifiers;
mod weapon;

pub use modifiers::{AffinityRule, ChannelMultipliers, ReinforceRow, ReinforceTables, StatMultipliers};
pub use weapon::{Weapon, WeaponIndexEntry, WeaponMeta};

use crate::curve::CurveTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Document-level metadata written by whatever produced the dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetMeta {
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Weapons, scaling curves, reinforcement tables and affinity rules
///
/// Lookups never fail except for weapons: a missing reinforcement row or affinity
/// rule resolves to an identity record. Without `scaling_curves` the calculator
/// skips stat scaling entirely and reports base damage only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub meta: Option<DatasetMeta>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub scaling_curves: Option<CurveTable>,
    #[serde(default)]
    pub reinforce_tables: ReinforceTables,
    #[serde(default)]
    pub affinity_rules: Vec<AffinityRule>,
}

impl Dataset {
    /// Find a weapon by id
    pub fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.id == id)
    }

    /// Reinforcement row for `path` at `level`, identity when absent
    pub fn reinforce_row(&self, path: &str, level: u32) -> ReinforceRow {
        match self
            .reinforce_tables
            .get(path)
            .and_then(|table| table.get(&level.to_string()))
        {
            Some(row) => *row,
            None => {
                debug!(path, level, "no reinforce row, using identity");
                ReinforceRow::default()
            }
        }
    }

    /// Affinity rule by name, neutral when absent
    pub fn affinity_rule(&self, name: &str) -> AffinityRule {
        match self.affinity_rules.iter().find(|a| a.affinity == name) {
            Some(rule) => rule.clone(),
            None => {
                debug!(affinity = name, "no affinity rule, using neutral modifiers");
                AffinityRule::neutral(name)
            }
        }
    }

    /// Affinity names in dataset order
    pub fn affinity_names(&self) -> Vec<&str> {
        self.affinity_rules.iter().map(|a| a.affinity.as_str()).collect()
    }

    /// Highest level present in the path's reinforcement table
    pub fn max_upgrade_level(&self, path: &str) -> Option<u32> {
        self.reinforce_tables
            .get(path)?
            .keys()
            .filter_map(|level| level.trim().parse::<u32>().ok())
            .max()
    }

    /// Whether the stat scaling stage can run
    pub fn has_scaling_curves(&self) -> bool {
        self.scaling_curves.is_some()
    }

    /// Lightweight listing of every weapon
    pub fn index(&self) -> Vec<WeaponIndexEntry> {
        self.weapons.iter().map(WeaponIndexEntry::from).collect()
    }
}
