use crate::alignment::{AlignmentReport, GearSide};
use crate::float_types::Real;
use crate::wasm::js_error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct GearSideJs {
    pub(crate) inner: GearSide,
}

#[wasm_bindgen]
impl GearSideJs {
    #[wasm_bindgen(getter)]
    pub fn teeth(&self) -> f64 {
        self.inner.teeth as f64
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.rotation as f64
    }

    #[wasm_bindgen(getter, js_name = toothDist)]
    pub fn tooth_dist(&self) -> f64 {
        self.inner.tooth_dist as f64
    }

    #[wasm_bindgen(getter, js_name = gapDist)]
    pub fn gap_dist(&self) -> f64 {
        self.inner.gap_dist as f64
    }

    #[wasm_bindgen(getter, js_name = halfTooth)]
    pub fn half_tooth(&self) -> f64 {
        self.inner.half_tooth as f64
    }
}

#[wasm_bindgen]
pub struct AlignmentReportJs {
    pub(crate) inner: AlignmentReport,
}

#[wasm_bindgen]
impl AlignmentReportJs {
    #[wasm_bindgen(getter, js_name = meshAngle)]
    pub fn mesh_angle(&self) -> f64 {
        self.inner.mesh_angle as f64
    }

    #[wasm_bindgen(getter, js_name = childMeshAngle)]
    pub fn child_mesh_angle(&self) -> f64 {
        self.inner.child_mesh_angle as f64
    }

    #[wasm_bindgen(getter)]
    pub fn parent(&self) -> GearSideJs {
        GearSideJs {
            inner: self.inner.parent,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn child(&self) -> GearSideJs {
        GearSideJs {
            inner: self.inner.child,
        }
    }

    #[wasm_bindgen(js_name = isMeshed)]
    pub fn is_meshed(&self) -> bool {
        self.inner.is_meshed()
    }
}

#[wasm_bindgen(js_name = getAlignmentInfo)]
pub fn get_alignment_info(
    parent_teeth: i32,
    child_teeth: i32,
    mesh_angle: f64,
    parent_rotation: f64,
    child_rotation: f64,
) -> Result<AlignmentReportJs, JsValue> {
    crate::get_alignment_info(
        parent_teeth.into(),
        child_teeth.into(),
        mesh_angle as Real,
        parent_rotation as Real,
        child_rotation as Real,
    )
    .map(|inner| AlignmentReportJs { inner })
    .map_err(js_error)
}
