//! Angular geometry of meshing spur gears.
//!
//! Given a tooth count and a rotation (radians), this crate answers where a gear's
//! teeth and gaps sit, which phase a child gear needs to mesh with its parent at a
//! given contact angle, and whether two gears currently interleave.
//!
//! Every function is pure: nothing is cached and nothing is shared, so all of them
//! can be called from any thread. Tooth counts below one are rejected with
//! [`GearError::InvalidToothCount`] before any arithmetic happens.
//!
//! ```
//! use gearmesh::{calculate_child_phase, verify_mesh_alignment};
//!
//! let child_rotation = calculate_child_phase(0.0, 0.0, 20, 10).unwrap();
//! assert!(verify_mesh_alignment(20, 10, 0.0, 0.0, child_rotation).unwrap());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **wasm**: JavaScript bindings through `wasm-bindgen`

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod alignment;
pub mod angle;
pub mod errors;
pub mod float_types;
pub mod phase;
pub mod placement;
pub mod positions;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use alignment::{AlignmentReport, Contact, GearSide, get_alignment_info, verify_mesh_alignment};
pub use angle::normalize_angle;
pub use errors::{GearError, GearResult};
pub use phase::calculate_child_phase;
pub use positions::{
    distance_to_nearest_gap, distance_to_nearest_tooth, gap_angles, is_near_gap, is_near_tooth,
    tooth_angles,
};
