//! Reinforcement rows and affinity rules

use crate::types::{null_as_default, DamageChannel, StatKey};
use serde::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multipliers for one upgrade level of one upgrade path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforceRow {
    /// Applied to every damage channel of the base
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub base_mult: f64,
    /// Applied to every stat's scaling
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub scaling_mult: f64,
}

impl Default for ReinforceRow {
    fn default() -> Self {
        ReinforceRow {
            base_mult: 1.0,
            scaling_mult: 1.0,
        }
    }
}

/// Upgrade path → level (as a string key) → row
pub type ReinforceTables = HashMap<String, HashMap<String, ReinforceRow>>;

/// Per damage channel multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelMultipliers {
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub phys: f64,
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub mag: f64,
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub fire: f64,
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub ligh: f64,
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub holy: f64,
}

impl Default for ChannelMultipliers {
    fn default() -> Self {
        ChannelMultipliers {
            phys: 1.0,
            mag: 1.0,
            fire: 1.0,
            ligh: 1.0,
            holy: 1.0,
        }
    }
}

impl ChannelMultipliers {
    pub fn get(&self, channel: DamageChannel) -> f64 {
        match channel {
            DamageChannel::Phys => self.phys,
            DamageChannel::Mag => self.mag,
            DamageChannel::Fire => self.fire,
            DamageChannel::Ligh => self.ligh,
            DamageChannel::Holy => self.holy,
        }
    }
}

/// Per stat multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatMultipliers {
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub str: f64,
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub dex: f64,
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub int: f64,
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub fth: f64,
    #[serde(default = "identity", deserialize_with = "null_as_identity")]
    pub arc: f64,
}

impl Default for StatMultipliers {
    fn default() -> Self {
        StatMultipliers {
            str: 1.0,
            dex: 1.0,
            int: 1.0,
            fth: 1.0,
            arc: 1.0,
        }
    }
}

impl StatMultipliers {
    pub fn get(&self, key: StatKey) -> f64 {
        match key {
            StatKey::Str => self.str,
            StatKey::Dex => self.dex,
            StatKey::Int => self.int,
            StatKey::Fth => self.fth,
            StatKey::Arc => self.arc,
        }
    }
}

/// Modifier set applied by an affinity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffinityRule {
    /// Affinity name, e.g. "Heavy" or "Keen"
    pub affinity: String,
    /// Weapon classes the affinity may be applied to (informational)
    #[serde(default = "default_allowed_on")]
    pub allowed_on: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_mult: ChannelMultipliers,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scaling_mult: StatMultipliers,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

impl AffinityRule {
    /// Rule that leaves base and scaling untouched
    pub fn neutral(name: &str) -> Self {
        AffinityRule {
            affinity: name.to_string(),
            allowed_on: default_allowed_on(),
            base_mult: ChannelMultipliers::default(),
            scaling_mult: StatMultipliers::default(),
            notes: String::new(),
        }
    }
}

fn identity() -> f64 {
    1.0
}

/// `null` multipliers count as absent; an explicit 0 is kept
fn null_as_identity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(identity))
}

fn default_allowed_on() -> String {
    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinforce_row_defaults() {
        let row: ReinforceRow = serde_json::from_str(r#"{"base_mult": 1.5}"#).unwrap();
        assert!((row.base_mult - 1.5).abs() < f64::EPSILON);
        assert!((row.scaling_mult - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_affinity_partial_multipliers() {
        let rule: AffinityRule = serde_json::from_str(
            r#"{
                "affinity": "Heavy",
                "base_mult": {"phys": 1.1},
                "scaling_mult": {"str": 1.6, "dex": 0}
            }"#,
        )
        .unwrap();

        assert!((rule.base_mult.get(DamageChannel::Phys) - 1.1).abs() < f64::EPSILON);
        assert!((rule.base_mult.get(DamageChannel::Fire) - 1.0).abs() < f64::EPSILON);
        assert!((rule.scaling_mult.get(StatKey::Str) - 1.6).abs() < f64::EPSILON);
        // An explicit zero is kept; only absent values default to 1
        assert_eq!(rule.scaling_mult.get(StatKey::Dex), 0.0);
        assert!((rule.scaling_mult.get(StatKey::Arc) - 1.0).abs() < f64::EPSILON);
        assert_eq!(rule.allowed_on, "unknown");
    }

    #[test]
    fn test_null_multiplier_is_identity() {
        let row: ReinforceRow =
            serde_json::from_str(r#"{"base_mult": null, "scaling_mult": 0}"#).unwrap();
        assert!((row.base_mult - 1.0).abs() < f64::EPSILON);
        assert_eq!(row.scaling_mult, 0.0);

        let mults: ChannelMultipliers = serde_json::from_str(r#"{"fire": null}"#).unwrap();
        assert!((mults.get(DamageChannel::Fire) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_neutral_rule_is_identity() {
        let rule = AffinityRule::neutral("Standard");
        for channel in DamageChannel::all() {
            assert!((rule.base_mult.get(*channel) - 1.0).abs() < f64::EPSILON);
        }
        for key in StatKey::all() {
            assert!((rule.scaling_mult.get(*key) - 1.0).abs() < f64::EPSILON);
        }
    }
}
