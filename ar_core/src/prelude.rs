//! Prelude module for convenient imports
//!
//! ```rust
//! use ar_core::prelude::*;
//! ```

// Core types
pub use crate::types::{DamageChannel, DamageVector, Grade, Requirements, ScalingGrades, StatKey, Stats};

// Dataset
pub use crate::dataset::{AffinityRule, Dataset, ReinforceRow, Weapon};

// Calculation
pub use crate::calculator::{calculate, CalcError, CalculationRequest, CalculationResult};
pub use crate::requirement::meets_requirement;
pub use crate::curve::evaluate_curve;
pub use crate::scaling::{compose_damage, Modifiers};

// Loading
pub use crate::config::{bundled_dataset, default_dataset, load_dataset};
