//! Phase of a child gear meshing with a parent.

use crate::angle::{normalize_angle, validate_teeth};
use crate::errors::GearResult;
use crate::float_types::{PI, Real};

/// Rotation a child gear must have so that, at `mesh_angle` (the direction from the
/// parent's center to the child's, in the parent's frame), a parent tooth meets a child gap.
///
/// With `ratio = parent_teeth / child_teeth` and `half = π / child_teeth` the result is
/// `normalize(half - π - mesh_angle * (1 + ratio) - parent_phase * ratio)`.
/// Neither angle argument needs to be canonical; the output always is.
///
/// Advancing the parent by `δ` moves the required child phase by `-δ * ratio`, which is
/// the counter-rotation of a meshing pair.
///
/// ```
/// use gearmesh::calculate_child_phase;
/// use gearmesh::float_types::PI;
/// let phase = calculate_child_phase(0.0, 0.0, 20, 10).unwrap();
/// assert!((phase - 11.0 * PI / 10.0).abs() < 1e-12);
/// ```
pub fn calculate_child_phase(
    parent_phase: Real,
    mesh_angle: Real,
    parent_teeth: i64,
    child_teeth: i64,
) -> GearResult<Real> {
    let parent_z = validate_teeth(parent_teeth)?;
    let child_z = validate_teeth(child_teeth)?;

    let ratio = parent_z / child_z;
    let half_tooth = PI / child_z;
    let offset = half_tooth - PI - mesh_angle * (1.0 + ratio) - parent_phase * ratio;
    Ok(normalize_angle(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::angular_distance;
    use crate::errors::GearError;
    use crate::float_types::TAU;
    use approx::assert_abs_diff_eq;

    #[test]
    fn equal_gears_head_on() {
        // ratio 1, half tooth π/12: π/12 - π -> 13π/12
        let phase = calculate_child_phase(0.0, 0.0, 12, 12).unwrap();
        assert_abs_diff_eq!(phase, 13.0 * PI / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn non_integer_ratio() {
        let phase = calculate_child_phase(0.4, 1.1, 15, 8).unwrap();
        let ratio = 15.0 / 8.0;
        let raw = PI / 8.0 - PI - 1.1 * (1.0 + ratio) - 0.4 * ratio;
        assert!((0.0..TAU).contains(&phase));
        assert_abs_diff_eq!(angular_distance(phase, raw), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn parent_advance_counter_rotates_child() {
        let before = calculate_child_phase(0.0, 0.7, 30, 10).unwrap();
        let after = calculate_child_phase(0.05, 0.7, 30, 10).unwrap();
        // child turns three times as far, the other way
        assert_abs_diff_eq!(angular_distance(after, before - 0.15), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn uncanonical_inputs() {
        let a = calculate_child_phase(0.3, 0.2, 20, 10).unwrap();
        let b = calculate_child_phase(0.3 + TAU, 0.2, 20, 10).unwrap();
        // ratio 2: a full parent turn moves the child two full turns
        assert_abs_diff_eq!(angular_distance(a, b), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_bad_counts() {
        assert_eq!(
            calculate_child_phase(0.0, 0.0, 20, 0),
            Err(GearError::InvalidToothCount { teeth: 0 })
        );
        assert_eq!(
            calculate_child_phase(0.0, 0.0, -1, 10),
            Err(GearError::InvalidToothCount { teeth: -1 })
        );
    }
}
