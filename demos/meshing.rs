//! This example demos placing a child gear next to a parent and keeping it meshed
//! while the parent turns.

use gearmesh::{
    calculate_child_phase,
    float_types::{Real, TAU},
    get_alignment_info,
    placement::{center_distance, child_center, mesh_angle_between, pitch_radius, tooth_points},
};
use nalgebra::Point2;

const MODULE: Real = 2.0; // [mm]
const PARENT_TEETH: i64 = 20;
const CHILD_TEETH: i64 = 10;

fn main() -> Result<(), gearmesh::GearError> {
    let parent_center = Point2::new(0.0, 0.0);
    let distance = center_distance(MODULE, PARENT_TEETH, CHILD_TEETH)?;
    let child = child_center(&parent_center, distance, 0.0);
    let mesh_angle = mesh_angle_between(&parent_center, &child);
    println!("child placed at ({:.3}, {:.3}), mesh angle {:.4} rad", child.x, child.y, mesh_angle);

    // a few teeth on the parent's pitch circle
    let radius = pitch_radius(MODULE, PARENT_TEETH)?;
    for p in tooth_points(&parent_center, radius, PARENT_TEETH, 0.0)?.iter().take(3) {
        println!("parent tooth at ({:.3}, {:.3})", p.x, p.y);
    }

    for step in 0..8 {
        let parent_rotation = step as Real * TAU / 64.0;
        let child_rotation =
            calculate_child_phase(parent_rotation, mesh_angle, PARENT_TEETH, CHILD_TEETH)?;
        let report = get_alignment_info(
            PARENT_TEETH,
            CHILD_TEETH,
            mesh_angle,
            parent_rotation,
            child_rotation,
        )?;
        println!(
            "parent {:.4} child {:.4}: parent {:?} (tooth {:.4}, gap {:.4}), child {:?} (tooth {:.4}, gap {:.4}), meshed: {}",
            parent_rotation,
            child_rotation,
            report.parent_contact(),
            report.parent.tooth_dist,
            report.parent.gap_dist,
            report.child_contact(),
            report.child.tooth_dist,
            report.child.gap_dist,
            report.is_meshed()
        );
    }
    Ok(())
}
