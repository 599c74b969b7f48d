use super::tolerance::round2;
use crate::model::Point;

#[inline]
pub fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 { ax * by - ay * bx }

#[inline]
pub fn dot(ax: f64, ay: f64, bx: f64, by: f64) -> f64 { ax * bx + ay * by }

/// Exact Euclidean distance, no rounding.
#[inline]
pub fn dist(a: Point, b: Point) -> f64 { (b.x - a.x).hypot(b.y - a.y) }

/// Real cube root; negative inputs go through the positive branch and are negated back.
#[inline]
pub fn real_cbrt(x: f64) -> f64 {
    if x > 0.0 {
        x.powf(1.0 / 3.0)
    } else if x < 0.0 {
        -(-x).powf(1.0 / 3.0)
    } else {
        0.0
    }
}

/// Unsigned angle in degrees (0..=180, rounded to 2 decimals) between rays `c->a` and `c->b`.
/// A zero-length ray yields 0.
pub fn angle_between(c: Point, a: Point, b: Point) -> f64 {
    let (ax, ay) = (a.x - c.x, a.y - c.y);
    let (bx, by) = (b.x - c.x, b.y - c.y);
    if (ax == 0.0 && ay == 0.0) || (bx == 0.0 && by == 0.0) { return 0.0; }
    round2(cross(ax, ay, bx, by).atan2(dot(ax, ay, bx, by)).to_degrees().abs())
}

/// Signed turn in degrees (-180..=180, rounded to 2 decimals) from direction `a` to direction `b`.
pub fn signed_turn(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    round2(cross(ax, ay, bx, by).atan2(dot(ax, ay, bx, by)).to_degrees())
}

/// Twice the signed area of the closed ring (positive when counter-clockwise).
pub fn signed_area2(pts: &[Point]) -> f64 {
    let n = pts.len();
    let mut acc = 0.0;
    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        acc += cross(a.x, a.y, b.x, b.y);
    }
    acc
}
