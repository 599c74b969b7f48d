use crate::interop::{new_obj, set_kv};
use js_sys::Object;
use shapes2d::ShapeError;
use wasm_bindgen::prelude::*;

// `{ok, <key>: payload}`; every binding result goes through here.
fn envelope(ok: bool, key: &str, payload: &JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(ok));
    set_kv(&o, key, payload);
    o.into()
}

pub fn ok(value: JsValue) -> JsValue { envelope(true, "value", &value) }

/// `{ok: false, error: {code, message, data?}}`.
pub fn failure(code: &str, message: &str, data: Option<Object>) -> JsValue {
    let body = new_obj();
    set_kv(&body, "code", &JsValue::from_str(code));
    set_kv(&body, "message", &JsValue::from_str(message));
    if let Some(d) = data { set_kv(&body, "data", &d.into()); }
    envelope(false, "error", &body.into())
}

fn num(o: &Object, key: &str, v: f64) { set_kv(o, key, &JsValue::from_f64(v)); }

fn text(o: &Object, key: &str, v: &str) { set_kv(o, key, &JsValue::from_str(v)); }

// The fields of each variant, for callers that branch on more than the code.
fn error_data(e: &ShapeError) -> Option<Object> {
    let d = new_obj();
    match e {
        ShapeError::TooFewVertices { min, got } => { num(&d, "min", *min as f64); num(&d, "got", *got as f64); }
        ShapeError::VertexCount { expected, got } => { num(&d, "expected", *expected as f64); num(&d, "got", *got as f64); }
        ShapeError::DisconnectedEdges { index } => num(&d, "index", *index as f64),
        ShapeError::UnexpectedKind { expected, got } => { text(&d, "expected", expected); text(&d, "got", got); }
        ShapeError::NonFinite(param) => text(&d, "param", param),
        ShapeError::OutOfBounds { param, got } => { text(&d, "param", param); num(&d, "got", *got); }
        ShapeError::CapsExceeded { what, max, got } => {
            text(&d, "what", what);
            num(&d, "max", *max as f64);
            num(&d, "got", *got as f64);
        }
        ShapeError::Json(_) => return None,
    }
    Some(d)
}

/// Envelope for a core error; the code is `ShapeError::code`.
pub fn from_shape_error(e: &ShapeError) -> JsValue { failure(e.code(), &e.to_string(), error_data(e)) }
