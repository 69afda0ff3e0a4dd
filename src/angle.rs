//! Angle normalization and tooth spacing primitives.
//!
//! Canonical angles live in the half-open interval `[0, 2π)`. Inputs are never
//! required to be canonical; outputs described as normalized always are.

use crate::errors::{GearError, GearResult};
use crate::float_types::{PI, Real, TAU};

/// Reduce any finite angle into `[0, 2π)`.
///
/// `%` keeps the sign of the dividend, so a negative remainder is shifted up by a
/// full turn afterwards. Tiny negative remainders round to exactly `2π` when shifted;
/// those are folded back to `0`.
///
/// ```
/// use gearmesh::angle::normalize_angle;
/// use gearmesh::float_types::PI;
/// assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_angle(angle: Real) -> Real {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    if a >= TAU { 0.0 } else { a }
}

/// Shortest angular separation between `a` and `b`, accounting for wraparound.
///
/// The result is always within `[0, π]`, whether or not the inputs are canonical.
#[inline]
pub fn angular_distance(a: Real, b: Real) -> Real {
    let d = (a - b).abs() % TAU;
    d.min(TAU - d)
}

/// Check that `teeth` can index tooth positions and return it as a [`Real`].
pub(crate) fn validate_teeth(teeth: i64) -> GearResult<Real> {
    if teeth < 1 {
        return Err(GearError::InvalidToothCount { teeth });
    }
    Ok(teeth as Real)
}

/// Angular spacing between adjacent teeth: `2π / teeth`.
pub fn tooth_pitch(teeth: i64) -> GearResult<Real> {
    Ok(TAU / validate_teeth(teeth)?)
}

/// Half of the tooth spacing, `π / teeth`: the offset from a tooth to the next gap.
pub fn half_tooth(teeth: i64) -> GearResult<Real> {
    Ok(PI / validate_teeth(teeth)?)
}
