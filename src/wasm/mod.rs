use crate::errors::GearError;
use wasm_bindgen::prelude::*;

pub mod alignment_js;
pub mod gear_math_js;

fn js_error(e: GearError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
