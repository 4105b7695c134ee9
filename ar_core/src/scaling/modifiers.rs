//! Modifiers - reinforcement and affinity resolved once per calculation

use crate::dataset::{AffinityRule, ChannelMultipliers, Dataset, ReinforceRow, StatMultipliers, Weapon};
use crate::types::{DamageChannel, StatKey};

/// Reinforcement row and affinity multipliers with every default already applied
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Modifiers {
    pub reinforce: ReinforceRow,
    pub affinity_base: ChannelMultipliers,
    pub affinity_scaling: StatMultipliers,
}

impl Modifiers {
    /// No reinforcement, neutral affinity
    pub fn identity() -> Self {
        Modifiers::default()
    }

    pub fn new(reinforce: ReinforceRow, affinity: &AffinityRule) -> Self {
        Modifiers {
            reinforce,
            affinity_base: affinity.base_mult,
            affinity_scaling: affinity.scaling_mult,
        }
    }

    /// Look up the weapon's reinforcement row at `level` and the named affinity
    pub fn resolve(dataset: &Dataset, weapon: &Weapon, level: u32, affinity: &str) -> Self {
        let reinforce = dataset.reinforce_row(&weapon.upgrade_path, level);
        let rule = dataset.affinity_rule(affinity);
        Modifiers::new(reinforce, &rule)
    }

    /// Unrounded base damage of one channel after reinforcement and affinity
    pub fn adjust_base(&self, base_at_zero: f64, channel: DamageChannel) -> f64 {
        base_at_zero * self.reinforce.base_mult * self.affinity_base.get(channel)
    }

    /// Multiplier on one stat's scaling
    pub fn scaling_multiplier(&self, key: StatKey) -> f64 {
        self.affinity_scaling.get(key) * self.reinforce.scaling_mult
    }
}
