use js_sys::{Float64Array, Object, Reflect};
use shapes2d::Point;
use wasm_bindgen::prelude::*;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

pub fn arr_f64(data: &[f64]) -> Float64Array { Float64Array::from(data) }

/// Points flattened as `[x0, y0, x1, y1, ...]`.
pub fn points_flat(points: &[Point]) -> Float64Array {
    let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    arr_f64(&flat)
}
