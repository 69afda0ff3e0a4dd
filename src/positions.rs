//! Tooth and gap positions of a single gear, and nearest-position queries.
//!
//! A gear with `teeth` teeth at rotation `rotation` has a tooth at
//! `rotation + i * 2π/teeth` for every `i` in `0..teeth`, and a gap half a
//! tooth further along each of them.

use crate::angle::{angular_distance, normalize_angle, validate_teeth};
use crate::errors::GearResult;
use crate::float_types::{DEFAULT_TOLERANCE, PI, Real, TAU};

/// Canonical angles of `count` evenly spaced positions, the first at `rotation + shift`.
fn spaced_angles(z: Real, count: i64, rotation: Real, shift: Real) -> impl Iterator<Item = Real> {
    let pitch = TAU / z;
    (0..count).map(move |i| normalize_angle(rotation + shift + (i as Real) * pitch))
}

fn nearest(target: Real, angles: impl Iterator<Item = Real>) -> Real {
    angles
        .map(|a| angular_distance(target, a))
        .fold(Real::INFINITY, Real::min)
}

/// Angles of every tooth, in index order.
///
/// The first tooth sits at `rotation`; the values are canonical, so after wraparound
/// they are not necessarily ascending.
///
/// ```
/// use gearmesh::tooth_angles;
/// let teeth = tooth_angles(4, 0.0).unwrap();
/// assert_eq!(teeth.len(), 4);
/// assert_eq!(teeth[0], 0.0);
/// ```
pub fn tooth_angles(teeth: i64, rotation: Real) -> GearResult<Vec<Real>> {
    let z = validate_teeth(teeth)?;
    Ok(spaced_angles(z, teeth, rotation, 0.0).collect())
}

/// Angles of every gap, in index order. Gap `i` lies midway between tooth `i` and tooth `i + 1`.
pub fn gap_angles(teeth: i64, rotation: Real) -> GearResult<Vec<Real>> {
    let z = validate_teeth(teeth)?;
    Ok(spaced_angles(z, teeth, rotation, PI / z).collect())
}

/// Angular distance from `target` to the closest tooth, in `[0, π]`.
///
/// `target` does not need to be canonical.
pub fn distance_to_nearest_tooth(target: Real, teeth: i64, rotation: Real) -> GearResult<Real> {
    let z = validate_teeth(teeth)?;
    Ok(nearest(target, spaced_angles(z, teeth, rotation, 0.0)))
}

/// Angular distance from `target` to the closest gap, in `[0, π]`.
pub fn distance_to_nearest_gap(target: Real, teeth: i64, rotation: Real) -> GearResult<Real> {
    let z = validate_teeth(teeth)?;
    Ok(nearest(target, spaced_angles(z, teeth, rotation, PI / z)))
}

/// Whether a tooth lies strictly closer than `tolerance` to `target`.
///
/// `None` uses [`DEFAULT_TOLERANCE`]. An explicit `Some(0.0)` is kept as given,
/// so nothing is ever near.
pub fn is_near_tooth(
    target: Real,
    teeth: i64,
    rotation: Real,
    tolerance: Option<Real>,
) -> GearResult<bool> {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    Ok(distance_to_nearest_tooth(target, teeth, rotation)? < tolerance)
}

/// Whether a gap lies strictly closer than `tolerance` to `target`.
///
/// Same defaulting rules as [`is_near_tooth`].
pub fn is_near_gap(
    target: Real,
    teeth: i64,
    rotation: Real,
    tolerance: Option<Real>,
) -> GearResult<bool> {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    Ok(distance_to_nearest_gap(target, teeth, rotation)? < tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GearError;
    use crate::float_types::FRAC_PI_2;
    use approx::assert_abs_diff_eq;

    #[test]
    fn single_tooth_gear() {
        assert_eq!(tooth_angles(1, 0.3).unwrap(), vec![0.3]);
        let gaps = gap_angles(1, 0.3).unwrap();
        assert_eq!(gaps.len(), 1);
        assert_abs_diff_eq!(gaps[0], 0.3 + PI, epsilon = 1e-12);
    }

    #[test]
    fn index_order_survives_wraparound() {
        let teeth = tooth_angles(4, 3.0 * FRAC_PI_2).unwrap();
        let expected = [3.0 * FRAC_PI_2, 0.0, FRAC_PI_2, PI];
        for (got, want) in teeth.iter().zip(expected) {
            // 0 may come back as a hair under 2π
            assert_abs_diff_eq!(angular_distance(*got, want), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn explicit_zero_tolerance_is_not_replaced() {
        // exactly on a tooth: distance 0 is not strictly below 0
        assert!(!is_near_tooth(0.0, 4, 0.0, Some(0.0)).unwrap());
        assert!(is_near_tooth(0.0, 4, 0.0, None).unwrap());
    }

    #[test]
    fn default_tolerance_is_strict() {
        let rotation = 0.0;
        let just_inside = DEFAULT_TOLERANCE * 0.5;
        let outside = DEFAULT_TOLERANCE * 2.0;
        assert!(is_near_tooth(just_inside, 8, rotation, None).unwrap());
        assert!(!is_near_tooth(outside, 8, rotation, None).unwrap());
        assert!(is_near_gap(PI / 8.0 + just_inside, 8, rotation, None).unwrap());
        assert!(!is_near_gap(PI / 8.0 + outside, 8, rotation, None).unwrap());
    }

    #[test]
    fn queries_reject_bad_counts() {
        let err = GearError::InvalidToothCount { teeth: 0 };
        assert_eq!(tooth_angles(0, 0.0), Err(err));
        assert_eq!(gap_angles(0, 0.0), Err(err));
        assert_eq!(distance_to_nearest_tooth(0.0, 0, 0.0), Err(err));
        assert_eq!(distance_to_nearest_gap(0.0, 0, 0.0), Err(err));
        assert_eq!(is_near_tooth(0.0, 0, 0.0, None), Err(err));
        assert_eq!(is_near_gap(0.0, 0, 0.0, Some(1.0)), Err(err));
    }
}
