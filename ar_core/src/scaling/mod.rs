//! Scaling system - resolving modifiers and composing base + stat scaling into AR

mod composer;
mod modifiers;

pub use composer::{compose_damage, requirement_penalty, ComposedDamage, StatContribution};
pub use modifiers::Modifiers;

/// Scaling calculation constants
pub mod constants {
    /// Highest fraction of full scaling a stat below its requirement can reach
    pub const UNMET_REQUIREMENT_SCALING_CAP: f64 = 0.5;

    /// Smallest requirement used as a penalty denominator
    pub const MIN_REQUIREMENT_DIVISOR: f64 = 1.0;
}
