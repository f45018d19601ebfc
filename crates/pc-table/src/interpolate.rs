//! Linear interpolation between two reference rows.

use crate::point::{Reading, ReferencePoint};

/// Linear interpolation of one quantity between `(p1, v1)` and `(p2, v2)`.
///
/// ```text
/// v = v1 + (p - p1) * (v2 - v1) / (p2 - p1)
/// ```
///
/// Callers must ensure `p1 != p2`.
#[inline]
pub fn lerp(p: f64, p1: f64, p2: f64, v1: f64, v2: f64) -> f64 {
    v1 + (p - p1) * (v2 - v1) / (p2 - p1)
}

/// Interpolate both volumes at `pressure` between the `lower` and `upper` rows.
pub fn interpolate_reading(
    pressure: f64,
    lower: &ReferencePoint,
    upper: &ReferencePoint,
) -> Reading {
    Reading {
        liquid_volume: lerp(
            pressure,
            lower.pressure,
            upper.pressure,
            lower.liquid_volume,
            upper.liquid_volume,
        ),
        vapor_volume: lerp(
            pressure,
            lower.pressure,
            upper.pressure,
            lower.vapor_volume,
            upper.vapor_volume,
        ),
    }
}
