use js_sys::Float64Array;
use serde::Serialize;
use serde_json::Value;
use shapes2d::json::{segment_from_json_strict, shape_from_json_strict};
use shapes2d::{Point, Polynomial, Segment, Shape, ShapeError};
use wasm_bindgen::prelude::*;

use crate::error;
use crate::interop::points_flat;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_value(v: JsValue) -> Result<Value, JsValue> {
    serde_wasm_bindgen::from_value::<Value>(v).map_err(|e| error::from_shape_error(&ShapeError::Json(e.to_string())))
}

fn parse_shape(v: JsValue) -> Result<Shape, JsValue> {
    shape_from_json_strict(parse_value(v)?).map_err(|e| error::from_shape_error(&e))
}

fn parse_segment(v: JsValue) -> Result<Segment, JsValue> {
    segment_from_json_strict(parse_value(v)?).map_err(|e| error::from_shape_error(&e))
}

// Plain variants swallow the error; leave a trace in the console.
fn warn_rejected(op: &str, e: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(op), e);
}

fn unwrap_or_warn<T>(op: &str, r: Result<T, JsValue>, fallback: T) -> T {
    r.unwrap_or_else(|e| {
        warn_rejected(op, &e);
        fallback
    })
}

fn envelope<T>(r: Result<T, JsValue>, to_js: impl FnOnce(T) -> JsValue) -> JsValue {
    match r {
        Ok(v) => error::ok(to_js(v)),
        Err(e) => e,
    }
}

// Intersections

fn points_between(a: JsValue, b: JsValue) -> Result<Vec<Point>, JsValue> {
    let a = parse_shape(a)?;
    let b = parse_shape(b)?;
    Ok(shapes2d::intersection_points(&a, &b))
}

/// Intersection points of two shape documents as `[x0, y0, x1, y1, ...]`.
#[wasm_bindgen]
pub fn intersection_points(a: JsValue, b: JsValue) -> Float64Array {
    points_flat(&unwrap_or_warn("intersection_points", points_between(a, b), Vec::new()))
}

#[wasm_bindgen]
pub fn intersection_points_res(a: JsValue, b: JsValue) -> JsValue {
    envelope(points_between(a, b), |pts| points_flat(&pts).into())
}

#[wasm_bindgen]
pub fn does_intersect(a: JsValue, b: JsValue) -> bool {
    unwrap_or_warn("does_intersect", points_between(a, b).map(|pts| !pts.is_empty()), false)
}

#[wasm_bindgen]
pub fn does_intersect_res(a: JsValue, b: JsValue) -> JsValue {
    envelope(points_between(a, b), |pts| JsValue::from_bool(!pts.is_empty()))
}

// Polynomials

fn roots_of(coeffs: &[f64]) -> Result<Vec<f64>, JsValue> {
    Polynomial::try_new(coeffs).map(|p| p.roots()).map_err(|e| error::from_shape_error(&e))
}

/// Real roots of a polynomial of degree <= 4, coefficients highest degree first.
#[wasm_bindgen]
pub fn polynomial_roots(coeffs: &[f64]) -> Float64Array {
    Float64Array::from(unwrap_or_warn("polynomial_roots", roots_of(coeffs), Vec::new()).as_slice())
}

#[wasm_bindgen]
pub fn polynomial_roots_res(coeffs: &[f64]) -> JsValue {
    envelope(roots_of(coeffs), |roots| Float64Array::from(roots.as_slice()).into())
}

// Lines and segments

fn check_threshold(threshold: f64) -> Result<(), JsValue> {
    if !threshold.is_finite() {
        return Err(error::from_shape_error(&ShapeError::NonFinite("threshold")));
    }
    if threshold < 0.0 {
        return Err(error::from_shape_error(&ShapeError::OutOfBounds { param: "threshold", got: threshold }));
    }
    Ok(())
}

fn on_segment(x: f64, y: f64, segment: JsValue, threshold: f64) -> Result<bool, JsValue> {
    if !x.is_finite() { return Err(error::from_shape_error(&ShapeError::NonFinite("x"))); }
    if !y.is_finite() { return Err(error::from_shape_error(&ShapeError::NonFinite("y"))); }
    check_threshold(threshold)?;
    let s = parse_segment(segment)?;
    Ok(shapes2d::is_point_on_segment(Point::new(x, y), &s, threshold))
}

#[wasm_bindgen]
pub fn is_point_on_segment(x: f64, y: f64, segment: JsValue, threshold: f64) -> bool {
    unwrap_or_warn("is_point_on_segment", on_segment(x, y, segment, threshold), false)
}

#[wasm_bindgen]
pub fn is_point_on_segment_res(x: f64, y: f64, segment: JsValue, threshold: f64) -> JsValue {
    envelope(on_segment(x, y, segment, threshold), JsValue::from_bool)
}

fn parallel(a: JsValue, b: JsValue) -> Result<bool, JsValue> {
    let a = parse_segment(a)?;
    let b = parse_segment(b)?;
    Ok(shapes2d::are_lines_parallel(&a, &b))
}

#[wasm_bindgen]
pub fn are_lines_parallel(a: JsValue, b: JsValue) -> bool {
    unwrap_or_warn("are_lines_parallel", parallel(a, b), false)
}

#[wasm_bindgen]
pub fn are_lines_parallel_res(a: JsValue, b: JsValue) -> JsValue {
    envelope(parallel(a, b), JsValue::from_bool)
}

// Measures

#[derive(Serialize)]
struct Measures {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    perimeter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<f64>,
}

fn measures_of(shape: &Shape) -> Measures {
    let kind = shape.kind().as_str();
    let closed = |area, perimeter| Measures { kind, area: Some(area), perimeter: Some(perimeter), length: None };
    match shape {
        Shape::Segment(s) => Measures { kind, area: None, perimeter: None, length: Some(s.length()) },
        Shape::Arc(a) => Measures { kind, area: None, perimeter: None, length: Some(a.length()) },
        Shape::Polygon(p) => closed(p.area(), p.perimeter()),
        Shape::Circle(c) => closed(c.area(), c.perimeter()),
        Shape::Ellipse(e) => closed(e.area(), e.perimeter()),
        Shape::Sector(s) => closed(s.area(), s.perimeter()),
    }
}

fn measure(doc: JsValue) -> Result<JsValue, JsValue> {
    let shape = parse_shape(doc)?;
    serde_wasm_bindgen::to_value(&measures_of(&shape)).map_err(|e| error::failure("serialize", &e.to_string(), None))
}

/// `{kind, area, perimeter}` for closed shapes, `{kind, length}` for segments and arcs;
/// `null` when the document is rejected.
#[wasm_bindgen]
pub fn shape_measures(doc: JsValue) -> JsValue {
    unwrap_or_warn("shape_measures", measure(doc), JsValue::NULL)
}

#[wasm_bindgen]
pub fn shape_measures_res(doc: JsValue) -> JsValue {
    envelope(measure(doc), |v| v)
}
