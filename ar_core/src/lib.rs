//! ar_core - Weapon attack rating calculation
//!
//! This library provides:
//! - Dataset: Weapons, scaling curves, reinforcement tables and affinity rules
//! - Requirement checking with the two-handed strength bonus
//! - Curve evaluation: piecewise linear stat → multiplier interpolation
//! - Scaling composition: base, reinforcement, affinity and per-stat scaling into AR
//! - calculate: the single entry point from a weapon selection to an AR breakdown

pub mod calculator;
pub mod config;
pub mod curve;
pub mod dataset;
pub mod prelude;
pub mod requirement;
pub mod scaling;
pub mod types;

// Re-export core types for convenience
pub use calculator::{calculate, CalcError, CalculationRequest, CalculationResult};
pub use config::{bundled_dataset, default_dataset, load_dataset, ConfigError};
pub use curve::{evaluate_curve, CurvePoint, CurveTable};
pub use dataset::{AffinityRule, Dataset, ReinforceRow, Weapon, WeaponIndexEntry};
pub use requirement::{effective_stat, meets_requirement, unmet_requirements};
pub use scaling::{compose_damage, ComposedDamage, Modifiers, StatContribution};
pub use types::{DamageChannel, DamageVector, Grade, Requirements, StatKey, Stats};
