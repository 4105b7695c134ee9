//! Scaling curves - piecewise linear stat → multiplier mappings keyed by grade

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Curve key used when a grade has no curve of its own
pub const DEFAULT_CURVE_KEY: &str = "default";

/// A single control point on a scaling curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Stat value at this point
    pub stat: f64,
    /// Multiplier reached at `stat`
    pub mult: f64,
}

impl CurvePoint {
    pub fn new(stat: f64, mult: f64) -> Self {
        CurvePoint { stat, mult }
    }
}

/// Curves keyed by grade letter, plus an optional `"default"` entry
pub type CurveTable = HashMap<String, Vec<CurvePoint>>;

/// Control points for a grade, falling back to the default curve when the grade has none
pub fn curve_for<'a>(curves: &'a CurveTable, grade: &str) -> &'a [CurvePoint] {
    curves
        .get(grade)
        .or_else(|| curves.get(DEFAULT_CURVE_KEY))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Evaluate the curve for `grade` at `stat`
///
/// Below the first point the first multiplier is returned, above the last point the last
/// multiplier. In between the two surrounding points are linearly interpolated. A segment
/// narrower than 1 (duplicate stat values) is treated as width 1. Missing curves yield 0.
pub fn evaluate_curve(curves: &CurveTable, grade: &str, stat: f64) -> f64 {
    interpolate(curve_for(curves, grade), stat)
}

/// Piecewise linear interpolation over sorted control points
pub fn interpolate(points: &[CurvePoint], stat: f64) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    if stat <= first.stat {
        return first.mult;
    }

    for w in points.windows(2) {
        let (prev, curr) = (w[0], w[1]);
        if stat <= curr.stat {
            let span = (curr.stat - prev.stat).max(1.0);
            let t = (stat - prev.stat) / span;
            return prev.mult + t * (curr.mult - prev.mult);
        }
    }

    points.last().map_or(0.0, |p| p.mult)
}
