//! Requirement checking - comparing effective stats against a weapon's minimums

use crate::types::{Requirements, StatKey, Stats};

/// Strength multiplier while two-handing (result is floored)
pub const TWO_HAND_STRENGTH_MULTIPLIER: f64 = 1.5;

/// Stat value used for requirements and scaling
///
/// Two-handing raises strength to `floor(str * 1.5)`; every other stat is used as-is.
pub fn effective_stat(stats: &Stats, key: StatKey, two_handed: bool) -> u32 {
    let raw = stats.get(key);
    if key == StatKey::Str && two_handed {
        (raw as f64 * TWO_HAND_STRENGTH_MULTIPLIER).floor() as u32
    } else {
        raw
    }
}

/// Whether every effective stat reaches its requirement
pub fn meets_requirement(requirements: &Requirements, stats: &Stats, two_handed: bool) -> bool {
    StatKey::all()
        .iter()
        .all(|key| effective_stat(stats, *key, two_handed) >= requirements.get(*key))
}

/// Stats that fall short of their requirement, in canonical order
pub fn unmet_requirements(requirements: &Requirements, stats: &Stats, two_handed: bool) -> Vec<StatKey> {
    StatKey::all()
        .iter()
        .copied()
        .filter(|key| effective_stat(stats, *key, two_handed) < requirements.get(*key))
        .collect()
}
