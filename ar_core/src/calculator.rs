//! Calculator - the single entry point turning a selection into an AR breakdown

use crate::dataset::Dataset;
use crate::requirement::unmet_requirements;
use crate::scaling::{compose_damage, Modifiers, StatContribution};
use crate::types::{DamageVector, StatKey, Stats};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Calculation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Unknown weapon: {0}")]
    WeaponNotFound(String),
}

/// Everything that varies between calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub weapon_id: String,
    pub stats: Stats,
    #[serde(default)]
    pub two_handed: bool,
    #[serde(default)]
    pub upgrade_level: u32,
    /// Affinity name; unknown names behave like a neutral affinity
    #[serde(default)]
    pub affinity: String,
}

impl CalculationRequest {
    pub fn new(weapon_id: impl Into<String>, stats: Stats) -> Self {
        CalculationRequest {
            weapon_id: weapon_id.into(),
            stats,
            two_handed: false,
            upgrade_level: 0,
            affinity: String::new(),
        }
    }

    pub fn two_handed(mut self, two_handed: bool) -> Self {
        self.two_handed = two_handed;
        self
    }

    pub fn upgrade_level(mut self, level: u32) -> Self {
        self.upgrade_level = level;
        self
    }

    pub fn affinity(mut self, affinity: impl Into<String>) -> Self {
        self.affinity = affinity.into();
        self
    }
}

/// AR breakdown for one weapon configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub weapon_id: String,
    /// Upgrade path the reinforcement row was looked up in
    pub upgrade_path: String,
    pub upgrade_level: u32,
    pub affinity: String,
    pub two_handed: bool,
    pub requirements_met: bool,
    /// Stats below their requirement
    pub unmet: Vec<StatKey>,
    pub base: DamageVector,
    pub scaling: DamageVector,
    pub total: DamageVector,
    pub contributions: Vec<StatContribution>,
}

impl CalculationResult {
    /// Sum of the total's five channels
    pub fn total_sum(&self) -> f64 {
        self.total.sum()
    }
}

/// Calculate the attack rating of a weapon for the given stats and upgrade choices
///
/// The only failure is an unknown weapon id. Missing reinforcement rows, affinity rules
/// and curves fall back to neutral values.
pub fn calculate(dataset: &Dataset, request: &CalculationRequest) -> Result<CalculationResult, CalcError> {
    let weapon = dataset
        .weapon(&request.weapon_id)
        .ok_or_else(|| CalcError::WeaponNotFound(request.weapon_id.clone()))?;

    let modifiers = Modifiers::resolve(dataset, weapon, request.upgrade_level, &request.affinity);
    let unmet = unmet_requirements(&weapon.requirements, &request.stats, request.two_handed);

    let composed = compose_damage(
        &weapon.base_damage_plus0,
        weapon,
        &request.stats,
        request.two_handed,
        &modifiers,
        dataset.scaling_curves.as_ref(),
    );

    debug!(
        weapon = %weapon.id,
        level = request.upgrade_level,
        affinity = %request.affinity,
        total = composed.total.sum(),
        "calculated attack rating"
    );

    Ok(CalculationResult {
        weapon_id: weapon.id.clone(),
        upgrade_path: weapon.upgrade_path.clone(),
        upgrade_level: request.upgrade_level,
        affinity: request.affinity.clone(),
        two_handed: request.two_handed,
        requirements_met: unmet.is_empty(),
        unmet,
        base: composed.base,
        scaling: composed.scaling,
        total: composed.total,
        contributions: composed.contributions,
    })
}
