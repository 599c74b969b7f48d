#![cfg(target_arch = "wasm32")]

use js_sys::{Float64Array, Reflect, JSON};
use shapes2d_wasm::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn doc(s: &str) -> JsValue { JSON::parse(s).unwrap() }

fn is_ok(v: &JsValue) -> bool { Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false) }

fn is_err_code(v: &JsValue, code: &str) -> bool {
    if is_ok(v) { return false; }
    if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
        if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) { return c.as_string().map_or(false, |s| s == code); }
    }
    false
}

fn value(v: &JsValue) -> JsValue { Reflect::get(v, &JsValue::from_str("value")).unwrap() }

const CIRCLE: &str = r#"{"kind":"circle","center":{"x":0,"y":0},"radius":5}"#;
const DIAGONAL: &str = r#"{"kind":"segment","p1":{"x":-6,"y":-6},"p2":{"x":6,"y":6}}"#;

#[wasm_bindgen_test]
fn circle_and_segment_meet_twice() {
    let flat = intersection_points(doc(CIRCLE), doc(DIAGONAL)).to_vec();
    assert_eq!(flat.len(), 4);
    assert!(flat.chunks(2).any(|p| p == [3.54, 3.54]));
    assert!(flat.chunks(2).any(|p| p == [-3.54, -3.54]));
    assert!(does_intersect(doc(CIRCLE), doc(DIAGONAL)));

    let r = intersection_points_res(doc(DIAGONAL), doc(CIRCLE));
    assert!(is_ok(&r));
    assert_eq!(Float64Array::from(value(&r)).length(), 4);
}

#[wasm_bindgen_test]
fn rejected_documents_return_typed_errors() {
    let bad_radius = r#"{"kind":"circle","center":{"x":0,"y":0},"radius":-1}"#;
    assert!(is_err_code(&intersection_points_res(doc(bad_radius), doc(DIAGONAL)), "out_of_bounds"));
    assert!(is_err_code(&does_intersect_res(doc(r#"{"kind":"blob"}"#), doc(CIRCLE)), "json_parse"));
    let two = r#"{"kind":"polygon","vertices":[{"x":0,"y":0},{"x":1,"y":1}]}"#;
    assert!(is_err_code(&does_intersect_res(doc(two), doc(CIRCLE)), "invalid_structure"));
    // plain variants fall back instead of failing
    assert_eq!(intersection_points(doc(bad_radius), doc(DIAGONAL)).length(), 0);
    assert!(!does_intersect(doc(two), doc(CIRCLE)));
}

#[wasm_bindgen_test]
fn polynomial_roots_and_caps() {
    let mut roots = polynomial_roots(&[1.0, -5.0, 6.0]).to_vec();
    roots.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(roots, vec![2.0, 3.0]);
    assert!(is_err_code(&polynomial_roots_res(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]), "caps_exceeded"));
    assert!(is_err_code(&polynomial_roots_res(&[f64::NAN, 1.0]), "non_finite"));
    assert!(is_ok(&polynomial_roots_res(&[1.0, 0.0, 1.0])));
}

#[wasm_bindgen_test]
fn segment_queries() {
    let seg = r#"{"kind":"segment","p1":{"x":0,"y":0},"p2":{"x":10,"y":0}}"#;
    let above = r#"{"kind":"segment","p1":{"x":0,"y":3},"p2":{"x":10,"y":3}}"#;
    assert!(is_point_on_segment(5.0, 0.0, doc(seg), 0.0));
    assert!(!is_point_on_segment(15.0, 0.0, doc(seg), 0.0));
    assert!(are_lines_parallel(doc(seg), doc(above)));
    assert!(!are_lines_parallel(doc(seg), doc(DIAGONAL)));

    assert!(is_err_code(&is_point_on_segment_res(f64::INFINITY, 0.0, doc(seg), 0.0), "non_finite"));
    assert!(is_err_code(&is_point_on_segment_res(1.0, 0.0, doc(seg), -1.0), "out_of_bounds"));
    // a circle where a segment is required
    assert!(is_err_code(&are_lines_parallel_res(doc(seg), doc(CIRCLE)), "invalid_structure"));
}

#[wasm_bindgen_test]
fn measures_by_kind() {
    let m = shape_measures_res(doc(r#"{"kind":"rect","location":{"x":0,"y":0},"width":4,"height":2}"#));
    assert!(is_ok(&m));
    let v = value(&m);
    assert_eq!(Reflect::get(&v, &JsValue::from_str("kind")).unwrap().as_string().as_deref(), Some("polygon"));
    assert_eq!(Reflect::get(&v, &JsValue::from_str("area")).unwrap().as_f64(), Some(8.0));
    assert_eq!(Reflect::get(&v, &JsValue::from_str("perimeter")).unwrap().as_f64(), Some(12.0));

    let arc = r#"{"kind":"arc","from":{"x":0,"y":0},"to":{"x":5,"y":5},"center":{"x":0,"y":5}}"#;
    let v = shape_measures(doc(arc));
    assert_eq!(Reflect::get(&v, &JsValue::from_str("length")).unwrap().as_f64(), Some(7.85));
    assert!(shape_measures(doc(r#"{"kind":"nope"}"#)).is_null());
}

fn error_field(v: &JsValue, path: &[&str]) -> JsValue {
    let mut cur = Reflect::get(v, &JsValue::from_str("error")).unwrap();
    for key in path {
        cur = Reflect::get(&cur, &JsValue::from_str(key)).unwrap();
    }
    cur
}

#[wasm_bindgen_test]
fn errors_carry_their_fields() {
    let flat = r#"{"kind":"ellipse","center":{"x":0,"y":0},"width":0,"height":2}"#;
    let r = intersection_points_res(doc(flat), doc(CIRCLE));
    assert!(is_err_code(&r, "out_of_bounds"));
    assert_eq!(error_field(&r, &["data", "param"]).as_string().as_deref(), Some("width"));
    assert_eq!(error_field(&r, &["data", "got"]).as_f64(), Some(0.0));

    let two = r#"{"kind":"polygon","vertices":[{"x":0,"y":0},{"x":1,"y":1}]}"#;
    let r = does_intersect_res(doc(two), doc(CIRCLE));
    assert_eq!(error_field(&r, &["data", "min"]).as_f64(), Some(3.0));
    assert_eq!(error_field(&r, &["message"]).as_string().as_deref(), Some("Minimum number of vertices is 3 (got 2)"));

    // parse failures have no structured data
    let r = does_intersect_res(doc(r#"{"kind":"blob"}"#), doc(CIRCLE));
    assert!(error_field(&r, &["data"]).is_undefined());
}
