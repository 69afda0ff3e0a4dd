//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use gearmesh::angle::angular_distance;
use gearmesh::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Compare two angles modulo a full turn.
pub fn angle_eq(a: Real, b: Real, eps: Real) -> bool {
    angular_distance(a, b) < eps
}

/// Rotations sampled across several turns in both directions.
pub fn rotations() -> Vec<Real> {
    (-40..=40).map(|i| i as Real * 0.3137).collect()
}

/// Tooth counts used by the sweeps.
pub const TEETH: [i64; 9] = [1, 2, 3, 4, 7, 10, 12, 20, 57];
