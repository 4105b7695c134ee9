//! Weapon records

use crate::types::{null_as_default, DamageVector, Requirements, ScalingGrades, StatKey};
use serde::{Deserialize, Serialize};

/// A weapon as stored in the dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "class")]
    pub weapon_class: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f64,
    /// Reinforcement table this weapon upgrades along
    #[serde(default = "default_upgrade_path")]
    pub upgrade_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Requirements,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scaling_grade_display: ScalingGrades,
    /// Damage at upgrade level 0
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_damage_plus0: DamageVector,
    #[serde(default)]
    pub meta: Option<WeaponMeta>,
}

/// Provenance notes carried along with a weapon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponMeta {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub patch_tag: String,
}

pub(crate) fn default_upgrade_path() -> String {
    "unknown".to_string()
}

impl Weapon {
    /// Requirement line, e.g. `REQ STR 12 / DEX 10 / INT 0 / FTH 0 / ARC 0`
    pub fn requirement_line(&self) -> String {
        let parts: Vec<String> = StatKey::all()
            .iter()
            .map(|key| format!("{} {}", key.label(), self.requirements.get(*key)))
            .collect();
        format!("REQ {}", parts.join(" / "))
    }

    /// Grade line, e.g. `Scaling (Display): STR D / DEX C / INT - / FTH - / ARC -`
    pub fn grade_line(&self) -> String {
        let parts: Vec<String> = StatKey::all()
            .iter()
            .map(|key| format!("{} {}", key.label(), self.scaling_grade_display.get(*key)))
            .collect();
        format!("Scaling (Display): {}", parts.join(" / "))
    }
}

/// Lightweight listing entry for a weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponIndexEntry {
    pub id: String,
    pub name: String,
    pub weapon_class: String,
    pub upgrade_path: String,
    pub weight: f64,
}

impl From<&Weapon> for WeaponIndexEntry {
    fn from(weapon: &Weapon) -> Self {
        WeaponIndexEntry {
            id: weapon.id.clone(),
            name: weapon.name.clone(),
            weapon_class: weapon.weapon_class.clone(),
            upgrade_path: weapon.upgrade_path.clone(),
            weight: weapon.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Grade;

    #[test]
    fn test_parse_minimal_weapon() {
        let weapon: Weapon = serde_json::from_str(r#"{"id": "club"}"#).unwrap();
        assert_eq!(weapon.upgrade_path, "unknown");
        assert_eq!(weapon.requirements.str, 0);
        assert_eq!(weapon.scaling_grade_display.str, Grade::NoScaling);
        assert_eq!(weapon.base_damage_plus0.sum(), 0.0);
        assert!(weapon.meta.is_none());
    }

    #[test]
    fn test_class_alias() {
        let weapon: Weapon =
            serde_json::from_str(r#"{"id": "dagger", "class": "dagger"}"#).unwrap();
        assert_eq!(weapon.weapon_class, "dagger");
    }

    #[test]
    fn test_display_lines() {
        let weapon: Weapon = serde_json::from_str(
            r#"{
                "id": "short_sword",
                "requirements": {"str": 8, "dex": 10},
                "scaling_grade_display": {"str": "D", "dex": "C"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            weapon.requirement_line(),
            "REQ STR 8 / DEX 10 / INT 0 / FTH 0 / ARC 0"
        );
        assert_eq!(
            weapon.grade_line(),
            "Scaling (Display): STR D / DEX C / INT - / FTH - / ARC -"
        );
    }
}
