//! Planar placement of meshing gears.
//!
//! Uses the standard proportions where a gear's pitch radius is `½ · module · teeth`,
//! so two gears of the same module mesh when their centers are one sum of pitch radii apart.

use crate::angle::{normalize_angle, tooth_pitch, validate_teeth};
use crate::errors::GearResult;
use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

/// Pitch circle radius of a gear: `0.5 * module * teeth`.
pub fn pitch_radius(module_: Real, teeth: i64) -> GearResult<Real> {
    Ok(0.5 * module_ * validate_teeth(teeth)?)
}

/// Center-to-center distance of two meshing gears with a shared module.
pub fn center_distance(module_: Real, parent_teeth: i64, child_teeth: i64) -> GearResult<Real> {
    Ok(pitch_radius(module_, parent_teeth)? + pitch_radius(module_, child_teeth)?)
}

/// Center of a child gear placed `distance` away from the parent along `mesh_angle`.
pub fn child_center(parent_center: &Point2<Real>, distance: Real, mesh_angle: Real) -> Point2<Real> {
    parent_center + Vector2::new(mesh_angle.cos(), mesh_angle.sin()) * distance
}

/// Canonical direction from the parent's center to the child's.
///
/// Coincident centers give `0`.
pub fn mesh_angle_between(parent_center: &Point2<Real>, child_center: &Point2<Real>) -> Real {
    let d = child_center - parent_center;
    normalize_angle(d.y.atan2(d.x))
}

/// Tooth positions on a circle of `radius` around `center`, in the same order as
/// [`tooth_angles`](crate::tooth_angles).
pub fn tooth_points(
    center: &Point2<Real>,
    radius: Real,
    teeth: i64,
    rotation: Real,
) -> GearResult<Vec<Point2<Real>>> {
    let pitch = tooth_pitch(teeth)?;
    Ok((0..teeth)
        .map(|i| {
            let a = normalize_angle(rotation + (i as Real) * pitch);
            child_center(center, radius, a)
        })
        .collect())
}
