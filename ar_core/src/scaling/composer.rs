//! Damage composition - base adjustment, per-stat scaling and final rounding

use super::constants::{MIN_REQUIREMENT_DIVISOR, UNMET_REQUIREMENT_SCALING_CAP};
use super::Modifiers;
use crate::curve::{evaluate_curve, CurveTable};
use crate::dataset::Weapon;
use crate::requirement::effective_stat;
use crate::types::{round_half_up, DamageChannel, DamageVector, Grade, StatKey, Stats};
use serde::{Deserialize, Serialize};

/// How much one stat added to the weapon's scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatContribution {
    pub stat: StatKey,
    pub grade: Grade,
    /// Stat value after the two-hand adjustment
    pub effective_stat: u32,
    pub curve_mult: f64,
    /// Affinity × reinforcement scaling multiplier
    pub combined_mult: f64,
    /// 1.0 when the requirement is met, at most 0.5 otherwise
    pub penalty: f64,
    /// coefficient × curve × combined × penalty
    pub stat_scale: f64,
}

/// Output of [`compose_damage`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComposedDamage {
    /// Base damage after reinforcement and affinity, rounded per channel
    pub base: DamageVector,
    /// Scaling contribution, rounded per channel for display
    pub scaling: DamageVector,
    /// `round(base + unrounded scaling)` per channel
    ///
    /// Because it is computed from the unrounded scaling, a channel may differ by 1 from
    /// `base + scaling`. The base is already a whole number, so with exact arithmetic both
    /// agree; the difference only shows once `base + scaling` loses the fractional half to
    /// f64 precision (bases around 2^52), never at ordinary attack ratings.
    pub total: DamageVector,
    /// One entry per stat that scaled (grade coefficient above zero)
    pub contributions: Vec<StatContribution>,
}

/// Scaling credit for a stat against its requirement
///
/// Full credit once the requirement is met. Below it, credit ramps linearly from 0 up to
/// the unmet cap. A requirement of 0 divides by 1.
pub fn requirement_penalty(effective: u32, requirement: u32) -> f64 {
    if effective >= requirement {
        return 1.0;
    }
    let ratio = effective as f64 / (requirement as f64).max(MIN_REQUIREMENT_DIVISOR);
    (ratio * UNMET_REQUIREMENT_SCALING_CAP).max(0.0)
}

/// Compose base damage and stat scaling into an attack rating
///
/// `curves` of `None` switches the scaling stage off: the result then carries the
/// adjusted base only, with zero scaling and `total == base`.
pub fn compose_damage(
    base_at_zero: &DamageVector,
    weapon: &Weapon,
    stats: &Stats,
    two_handed: bool,
    modifiers: &Modifiers,
    curves: Option<&CurveTable>,
) -> ComposedDamage {
    // Step 1: reinforce + affinity on the level 0 base
    let base = base_at_zero.map(|channel, value| round_half_up(modifiers.adjust_base(value, channel)));

    // Step 2: per-stat scaling on the adjusted base
    let mut raw_scaling = DamageVector::default();
    let mut contributions = Vec::new();

    if let Some(curves) = curves {
        for key in StatKey::all() {
            let grade = weapon.scaling_grade_display.get(*key);
            let coefficient = grade.base_coefficient();
            if coefficient == 0.0 {
                continue;
            }

            let effective = effective_stat(stats, *key, two_handed);
            let curve_mult = evaluate_curve(curves, grade.letter(), effective as f64);
            let combined_mult = modifiers.scaling_multiplier(*key);
            let penalty = requirement_penalty(effective, weapon.requirements.get(*key));
            let stat_scale = coefficient * curve_mult * combined_mult * penalty;

            for channel in DamageChannel::all() {
                raw_scaling[*channel] += base[*channel] * stat_scale;
            }

            contributions.push(StatContribution {
                stat: *key,
                grade: grade.clone(),
                effective_stat: effective,
                curve_mult,
                combined_mult,
                penalty,
                stat_scale,
            });
        }
    }

    // Step 3: total from the unrounded scaling, displayed scaling rounded separately
    let total = base.map(|channel, value| round_half_up(value + raw_scaling[channel]).max(0.0));
    let scaling = raw_scaling.map(|_, value| round_half_up(value).max(0.0));

    ComposedDamage {
        base: base.map(|_, value| value.max(0.0)),
        scaling,
        total,
        contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurvePoint;
    use crate::dataset::ReinforceRow;
    use crate::types::Requirements;
    use proptest::prelude::*;

    fn default_curve() -> CurveTable {
        let mut curves = CurveTable::new();
        curves.insert(
            "default".to_string(),
            vec![CurvePoint::new(10.0, 1.0), CurvePoint::new(40.0, 2.0)],
        );
        curves
    }

    fn weapon(str_grade: &str, str_req: u32) -> Weapon {
        let mut weapon: Weapon = serde_json::from_str(r#"{"id": "test_blade"}"#).unwrap();
        weapon.base_damage_plus0 = DamageVector::physical(100.0);
        weapon.scaling_grade_display.str = Grade::from_letter(str_grade);
        weapon.requirements = Requirements {
            str: str_req,
            ..Default::default()
        };
        weapon
    }

    fn compose(weapon: &Weapon, stats: &Stats, two_handed: bool, curves: Option<&CurveTable>) -> ComposedDamage {
        compose_damage(
            &weapon.base_damage_plus0,
            weapon,
            stats,
            two_handed,
            &Modifiers::identity(),
            curves,
        )
    }

    #[test]
    fn test_e_grade_meeting_requirement() {
        let curves = default_curve();
        let weapon = weapon("E", 10);
        let stats = Stats::new(10, 0, 0, 0, 0);

        let result = compose(&weapon, &stats, false, Some(&curves));

        // curve 1.0, penalty 1.0, statScale 0.4 → 100 * 0.4 = 40
        assert!((result.base.phys - 100.0).abs() < f64::EPSILON);
        assert!((result.scaling.phys - 40.0).abs() < f64::EPSILON);
        assert!((result.total.phys - 140.0).abs() < f64::EPSILON);

        let contribution = &result.contributions[0];
        assert_eq!(contribution.stat, StatKey::Str);
        assert!((contribution.curve_mult - 1.0).abs() < f64::EPSILON);
        assert!((contribution.penalty - 1.0).abs() < f64::EPSILON);
        assert!((contribution.stat_scale - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_below_requirement_penalty() {
        let curves = default_curve();
        let weapon = weapon("E", 10);
        let stats = Stats::new(5, 0, 0, 0, 0);

        let result = compose(&weapon, &stats, false, Some(&curves));

        // penalty 5/10 * 0.5 = 0.25, curve clamped to 1.0 → statScale 0.1
        assert!((result.contributions[0].penalty - 0.25).abs() < f64::EPSILON);
        assert!((result.scaling.phys - 10.0).abs() < f64::EPSILON);
        assert!((result.total.phys - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_grade_contributes_nothing() {
        let curves = default_curve();
        let weapon = weapon("-", 0);

        for strength in [0, 10, 40, 99] {
            let result = compose(&weapon, &Stats::new(strength, 0, 0, 0, 0), false, Some(&curves));
            assert_eq!(result.scaling.phys, 0.0);
            assert!((result.total.phys - 100.0).abs() < f64::EPSILON);
            assert!(result.contributions.is_empty());
        }
    }

    #[test]
    fn test_unrecognized_grade_contributes_nothing() {
        let curves = default_curve();
        let weapon = weapon("Q", 0);
        let result = compose(&weapon, &Stats::uniform(60), false, Some(&curves));
        assert_eq!(result.scaling.sum(), 0.0);
    }

    #[test]
    fn test_missing_curves_disable_scaling() {
        let weapon = weapon("S", 0);
        let result = compose(&weapon, &Stats::uniform(80), false, None);
        assert_eq!(result.scaling, DamageVector::default());
        assert_eq!(result.total, result.base);
        assert!(result.contributions.is_empty());
    }

    #[test]
    fn test_two_handing_raises_strength_scaling() {
        let curves = default_curve();
        let weapon = weapon("E", 10);
        let stats = Stats::new(20, 0, 0, 0, 0);

        let one_hand = compose(&weapon, &stats, false, Some(&curves));
        let two_hand = compose(&weapon, &stats, true, Some(&curves));

        // 20 → curve 1.333.., two-handed 30 → curve 1.666..
        assert_eq!(two_hand.contributions[0].effective_stat, 30);
        assert!(two_hand.scaling.phys > one_hand.scaling.phys);
        assert!((one_hand.scaling.phys - 53.0).abs() < f64::EPSILON);
        assert!((two_hand.scaling.phys - 67.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reinforcement_compounds_into_scaling() {
        let curves = default_curve();
        let weapon = weapon("E", 10);
        let stats = Stats::new(10, 0, 0, 0, 0);
        let modifiers = Modifiers {
            reinforce: ReinforceRow {
                base_mult: 2.0,
                scaling_mult: 1.5,
            },
            ..Default::default()
        };

        let result = compose_damage(&weapon.base_damage_plus0, &weapon, &stats, false, &modifiers, Some(&curves));

        // base 200, statScale 0.4 * 1.5 = 0.6 → scaling 120 on the adjusted base
        assert!((result.base.phys - 200.0).abs() < f64::EPSILON);
        assert!((result.scaling.phys - 120.0).abs() < 1e-9);
        assert!((result.total.phys - 320.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_affinity_per_channel_base() {
        let weapon = weapon("-", 0);
        let mut base = DamageVector::physical(100.0);
        base.fire = 50.0;
        let mut modifiers = Modifiers::identity();
        modifiers.affinity_base.phys = 0.8;
        modifiers.affinity_base.fire = 1.25;

        let result = compose_damage(&base, &weapon, &Stats::default(), false, &modifiers, None);
        assert!((result.base.phys - 80.0).abs() < f64::EPSILON);
        // 62.5 rounds half up
        assert!((result.base.fire - 63.0).abs() < f64::EPSILON);
        assert!((result.total.sum() - 143.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scaling_accumulates_before_rounding() {
        let curves = default_curve();
        let mut weapon = weapon("E", 0);
        weapon.scaling_grade_display.dex = Grade::E;

        let mut modifiers = Modifiers::identity();
        // statScale per stat = 0.4 * 1.0 * 0.0075 = 0.003 → 0.3 each, 0.6 together
        modifiers.affinity_scaling.str = 0.0075;
        modifiers.affinity_scaling.dex = 0.0075;

        let result = compose_damage(
            &weapon.base_damage_plus0,
            &weapon,
            &Stats::uniform(10),
            false,
            &modifiers,
            Some(&curves),
        );

        assert_eq!(result.contributions.len(), 2);
        assert!((result.scaling.phys - 1.0).abs() < f64::EPSILON);
        assert!((result.total.phys - 101.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_can_trail_displayed_sum_by_one() {
        // The total is rounded from base + unrounded scaling, the displayed scaling is
        // rounded on its own. With a base at 2^52 the half unit of scaling is lost in the
        // total while the displayed scaling still rounds it up.
        let curves = default_curve();
        let mut weapon = weapon("A", 0);
        let big = 2f64.powi(52);
        weapon.base_damage_plus0 = DamageVector::physical(big);

        let mut modifiers = Modifiers::identity();
        modifiers.affinity_scaling.str = 2f64.powi(-53);

        let result = compose_damage(
            &weapon.base_damage_plus0,
            &weapon,
            &Stats::new(10, 0, 0, 0, 0),
            false,
            &modifiers,
            Some(&curves),
        );

        assert_eq!(result.base.phys, big);
        assert_eq!(result.scaling.phys, 1.0);
        assert_eq!(result.total.phys, big);
        assert_eq!(result.base.phys + result.scaling.phys - result.total.phys, 1.0);
    }

    #[test]
    fn test_total_within_one_of_displayed_sum() {
        let curves = default_curve();
        let mut weapon = weapon("C", 14);
        weapon.scaling_grade_display.dex = Grade::B;
        weapon.requirements.dex = 12;
        weapon.base_damage_plus0 = DamageVector::new(117.0, 33.0, 0.0, 0.0, 21.0);

        for strength in (0..60).step_by(7) {
            for dex in (0..60).step_by(5) {
                let stats = Stats::new(strength, dex, 0, 0, 0);
                let result = compose(&weapon, &stats, strength % 2 == 0, Some(&curves));
                for channel in DamageChannel::all() {
                    let displayed = result.base[*channel] + result.scaling[*channel];
                    assert!((result.total[*channel] - displayed).abs() <= 1.0);
                    assert!(result.total[*channel] >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let curves = default_curve();
        let weapon = weapon("C", 18);
        let stats = Stats::new(17, 12, 9, 9, 9);
        let first = compose(&weapon, &stats, true, Some(&curves));
        let second = compose(&weapon, &stats, true, Some(&curves));
        assert_eq!(first, second);
    }

    #[test]
    fn test_requirement_penalty_edges() {
        assert!((requirement_penalty(10, 10) - 1.0).abs() < f64::EPSILON);
        assert!((requirement_penalty(0, 10) - 0.0).abs() < f64::EPSILON);
        assert!((requirement_penalty(9, 10) - 0.45).abs() < 1e-12);
        assert!((requirement_penalty(0, 0) - 1.0).abs() < f64::EPSILON);
    }

    fn grade_strategy() -> impl Strategy<Value = Grade> {
        prop_oneof![
            Just(Grade::S),
            Just(Grade::A),
            Just(Grade::B),
            Just(Grade::C),
            Just(Grade::D),
            Just(Grade::E),
            Just(Grade::NoScaling),
        ]
    }

    proptest! {
        #[test]
        fn prop_two_handing_never_lowers_scaling(
            strength in 0u32..99,
            dex in 0u32..99,
            str_req in 0u32..60,
            str_grade in grade_strategy(),
            dex_grade in grade_strategy(),
            phys in 0u32..400,
            fire in 0u32..200,
        ) {
            let curves = default_curve();
            let mut weapon = weapon("-", str_req);
            weapon.scaling_grade_display.str = str_grade;
            weapon.scaling_grade_display.dex = dex_grade;
            weapon.base_damage_plus0 = DamageVector::new(phys as f64, 0.0, fire as f64, 0.0, 0.0);
            let stats = Stats::new(strength, dex, 0, 0, 0);

            let one_hand = compose(&weapon, &stats, false, Some(&curves));
            let two_hand = compose(&weapon, &stats, true, Some(&curves));

            prop_assert_eq!(one_hand.base, two_hand.base);
            for channel in DamageChannel::all() {
                prop_assert!(two_hand.scaling[*channel] >= one_hand.scaling[*channel]);
                prop_assert!(two_hand.total[*channel] >= one_hand.total[*channel]);
            }
        }
    }
}
