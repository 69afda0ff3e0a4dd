use crate::float_types::Real;
use crate::wasm::js_error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = normalizeAngle)]
pub fn normalize_angle(angle: f64) -> f64 {
    crate::angle::normalize_angle(angle as Real) as f64
}

#[wasm_bindgen(js_name = toothAngles)]
pub fn tooth_angles(num_teeth: i32, rotation: f64) -> Result<Vec<f64>, JsValue> {
    crate::tooth_angles(num_teeth.into(), rotation as Real)
        .map(|angles| angles.into_iter().map(|a| a as f64).collect())
        .map_err(js_error)
}

#[wasm_bindgen(js_name = gapAngles)]
pub fn gap_angles(num_teeth: i32, rotation: f64) -> Result<Vec<f64>, JsValue> {
    crate::gap_angles(num_teeth.into(), rotation as Real)
        .map(|angles| angles.into_iter().map(|a| a as f64).collect())
        .map_err(js_error)
}

#[wasm_bindgen(js_name = distanceToNearestTooth)]
pub fn distance_to_nearest_tooth(
    target_angle: f64,
    num_teeth: i32,
    rotation: f64,
) -> Result<f64, JsValue> {
    crate::distance_to_nearest_tooth(target_angle as Real, num_teeth.into(), rotation as Real)
        .map(|d| d as f64)
        .map_err(js_error)
}

#[wasm_bindgen(js_name = distanceToNearestGap)]
pub fn distance_to_nearest_gap(
    target_angle: f64,
    num_teeth: i32,
    rotation: f64,
) -> Result<f64, JsValue> {
    crate::distance_to_nearest_gap(target_angle as Real, num_teeth.into(), rotation as Real)
        .map(|d| d as f64)
        .map_err(js_error)
}

// `tolerance` left undefined on the JS side falls back to the default
#[wasm_bindgen(js_name = isNearTooth)]
pub fn is_near_tooth(
    target_angle: f64,
    num_teeth: i32,
    rotation: f64,
    tolerance: Option<f64>,
) -> Result<bool, JsValue> {
    crate::is_near_tooth(
        target_angle as Real,
        num_teeth.into(),
        rotation as Real,
        tolerance.map(|t| t as Real),
    )
    .map_err(js_error)
}

#[wasm_bindgen(js_name = isNearGap)]
pub fn is_near_gap(
    target_angle: f64,
    num_teeth: i32,
    rotation: f64,
    tolerance: Option<f64>,
) -> Result<bool, JsValue> {
    crate::is_near_gap(
        target_angle as Real,
        num_teeth.into(),
        rotation as Real,
        tolerance.map(|t| t as Real),
    )
    .map_err(js_error)
}

#[wasm_bindgen(js_name = calculateChildPhase)]
pub fn calculate_child_phase(
    parent_phase: f64,
    mesh_angle: f64,
    parent_teeth: i32,
    child_teeth: i32,
) -> Result<f64, JsValue> {
    crate::calculate_child_phase(
        parent_phase as Real,
        mesh_angle as Real,
        parent_teeth.into(),
        child_teeth.into(),
    )
    .map(|p| p as f64)
    .map_err(js_error)
}

#[wasm_bindgen(js_name = verifyMeshAlignment)]
pub fn verify_mesh_alignment(
    parent_teeth: i32,
    child_teeth: i32,
    mesh_angle: f64,
    parent_rotation: f64,
    child_rotation: f64,
) -> Result<bool, JsValue> {
    crate::verify_mesh_alignment(
        parent_teeth.into(),
        child_teeth.into(),
        mesh_angle as Real,
        parent_rotation as Real,
        child_rotation as Real,
    )
    .map_err(js_error)
}
