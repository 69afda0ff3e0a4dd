//! Mesh alignment judgment and diagnostics for a parent/child gear pair.
//!
//! The child faces the contact point from the opposite side, so its mesh-facing
//! angle is the parent's mesh angle turned by π.

use crate::angle::{half_tooth, normalize_angle, validate_teeth};
use crate::errors::GearResult;
use crate::float_types::{MESH_EPSILON, PI, Real};
use crate::positions::{distance_to_nearest_gap, distance_to_nearest_tooth};
use tracing::trace;

/// What a gear presents at the contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// A tooth is closer than any gap by more than [`MESH_EPSILON`].
    ToothCloser,
    /// A gap is closer than any tooth by more than [`MESH_EPSILON`].
    GapCloser,
    /// Tooth and gap are within [`MESH_EPSILON`] of each other.
    Neutral,
}

/// Classify one side of a mesh from its tooth and gap distances.
pub fn classify_contact(tooth_dist: Real, gap_dist: Real) -> Contact {
    if tooth_dist < gap_dist - MESH_EPSILON {
        Contact::ToothCloser
    } else if gap_dist < tooth_dist - MESH_EPSILON {
        Contact::GapCloser
    } else {
        Contact::Neutral
    }
}

/// Whether a pair of contacts interleaves.
///
/// A neutral side is accepted; otherwise one side must show a tooth and the other a gap.
pub const fn contacts_mesh(parent: Contact, child: Contact) -> bool {
    matches!(
        (parent, child),
        (Contact::Neutral, _)
            | (_, Contact::Neutral)
            | (Contact::ToothCloser, Contact::GapCloser)
            | (Contact::GapCloser, Contact::ToothCloser)
    )
}

/// One gear's half of an [`AlignmentReport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearSide {
    pub teeth: i64,
    /// Rotation as supplied, not normalized.
    pub rotation: Real,
    pub tooth_dist: Real,
    pub gap_dist: Real,
    /// `π / teeth`
    pub half_tooth: Real,
}

impl GearSide {
    fn measure(target: Real, teeth: i64, rotation: Real) -> GearResult<Self> {
        Ok(GearSide {
            teeth,
            rotation,
            tooth_dist: distance_to_nearest_tooth(target, teeth, rotation)?,
            gap_dist: distance_to_nearest_gap(target, teeth, rotation)?,
            half_tooth: half_tooth(teeth)?,
        })
    }

    /// Classify this side with [`classify_contact`].
    pub fn contact(&self) -> Contact {
        classify_contact(self.tooth_dist, self.gap_dist)
    }
}

/// Snapshot of both gears at the contact point. Carries no judgment of its own;
/// [`AlignmentReport::is_meshed`] applies the same rule as [`verify_mesh_alignment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentReport {
    /// Mesh angle as supplied.
    pub mesh_angle: Real,
    /// `normalize(mesh_angle + π)`
    pub child_mesh_angle: Real,
    pub parent: GearSide,
    pub child: GearSide,
}

impl AlignmentReport {
    pub fn parent_contact(&self) -> Contact {
        self.parent.contact()
    }

    pub fn child_contact(&self) -> Contact {
        self.child.contact()
    }

    pub fn is_meshed(&self) -> bool {
        contacts_mesh(self.parent_contact(), self.child_contact())
    }
}

/// The angle at which the child faces the parent.
#[inline]
pub fn child_mesh_angle(mesh_angle: Real) -> Real {
    normalize_angle(mesh_angle + PI)
}

/// Measure both gears at the contact point.
///
/// Both tooth counts are checked before any distance is computed.
pub fn get_alignment_info(
    parent_teeth: i64,
    child_teeth: i64,
    mesh_angle: Real,
    parent_rotation: Real,
    child_rotation: Real,
) -> GearResult<AlignmentReport> {
    validate_teeth(parent_teeth)?;
    validate_teeth(child_teeth)?;

    let child_mesh_angle = child_mesh_angle(mesh_angle);
    Ok(AlignmentReport {
        mesh_angle,
        child_mesh_angle,
        parent: GearSide::measure(mesh_angle, parent_teeth, parent_rotation)?,
        child: GearSide::measure(child_mesh_angle, child_teeth, child_rotation)?,
    })
}

/// Whether the two gears interleave at the contact point: one shows a tooth where
/// the other shows a gap.
///
/// This is a qualitative check. Any rotational slack that keeps the same side closer
/// passes, and a side whose tooth and gap distances tie within [`MESH_EPSILON`] is
/// accepted outright.
///
/// ```
/// use gearmesh::verify_mesh_alignment;
/// use gearmesh::float_types::PI;
/// assert!(verify_mesh_alignment(20, 10, 0.0, 0.0, PI / 10.0).unwrap());
/// assert!(!verify_mesh_alignment(20, 10, 0.0, 0.0, 0.0).unwrap());
/// ```
pub fn verify_mesh_alignment(
    parent_teeth: i64,
    child_teeth: i64,
    mesh_angle: Real,
    parent_rotation: Real,
    child_rotation: Real,
) -> GearResult<bool> {
    let report = get_alignment_info(
        parent_teeth,
        child_teeth,
        mesh_angle,
        parent_rotation,
        child_rotation,
    )?;
    let parent = report.parent_contact();
    let child = report.child_contact();
    let meshed = contacts_mesh(parent, child);

    trace!(
        ?parent,
        ?child,
        meshed,
        "mesh check at {:.4} rad: parent {} teeth, child {} teeth",
        mesh_angle,
        parent_teeth,
        child_teeth
    );
    Ok(meshed)
}
