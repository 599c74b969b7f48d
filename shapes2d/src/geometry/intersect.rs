// Analytic line/segment/circle intersections in f64.
// Every returned point is snapped to the 2-decimal output grid.

use super::tolerance::{in_unit_interval, is_tangent};
use crate::model::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSolve {
    // Zero determinant: parallel or collinear
    Parallel,
    // Infinite lines meet at `at`; t runs along the first line, u along the second
    Hit { t: f64, u: f64, at: Point },
}

#[inline]
fn orient(a: Point, b: Point, c: Point) -> f64 { (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x) }

/// Solve the 2x2 system of lines a1->a2 and b1->b2. Only an exactly zero
/// denominator counts as parallel.
pub fn solve_lines(a1: Point, a2: Point, b1: Point, b2: Point) -> LineSolve {
    let r = a2 - a1;
    let s = b2 - b1;
    let rxs = r.cross(s);
    if rxs == 0.0 { return LineSolve::Parallel; }
    let qp = b1 - a1;
    let t = qp.cross(s) / rxs;
    let u = qp.cross(r) / rxs;
    LineSolve::Hit { t, u, at: a1 + r * t }
}

/// Intersection of the infinite lines through both segments.
pub fn line_line(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    match solve_lines(a1, a2, b1, b2) {
        LineSolve::Parallel => None,
        LineSolve::Hit { at, .. } => Some(at.rounded()),
    }
}

/// Intersection of two bounded segments; both parameters must fall in [0,1].
pub fn segment_segment(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    match solve_lines(a1, a2, b1, b2) {
        LineSolve::Hit { t, u, at } if in_unit_interval(t) && in_unit_interval(u) => Some(at.rounded()),
        _ => None,
    }
}

/// Lines are parallel when their direction cross product is exactly zero.
pub fn are_parallel(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    matches!(solve_lines(a1, a2, b1, b2), LineSolve::Parallel)
}

/// Perpendicular distance from `p` to the infinite line a->b (unrounded).
/// Degenerate lines fall back to the distance to `a`.
pub fn line_distance(p: Point, a: Point, b: Point) -> f64 {
    let len = (b.x - a.x).hypot(b.y - a.y);
    if len == 0.0 { return (p.x - a.x).hypot(p.y - a.y); }
    orient(a, b, p).abs() / len
}

/// Foot of the perpendicular from `p` onto the line a->b, with its parameter along a->b.
pub fn project_onto_line(p: Point, a: Point, b: Point) -> Option<(f64, Point)> {
    let d = b - a;
    let dd = d.length_sq();
    if dd == 0.0 { return None; }
    let t = (p - a).dot(d) / dd;
    Some((t, a + d * t))
}

/// Segment p1->p2 against the circle (center, radius). Tangency is resolved with the
/// perpendicular foot from the center instead of the double root.
pub fn segment_circle(p1: Point, p2: Point, center: Point, radius: f64) -> Vec<Point> {
    let d = p2 - p1;
    let f = p1 - center;
    let a = d.length_sq();
    if a == 0.0 { return Vec::new(); }
    let b = 2.0 * d.dot(f);
    let c = f.length_sq() - radius * radius;
    let disc = b * b - 4.0 * a * c;

    // disc / 4a is r^2 - (distance from center to the line)^2
    if is_tangent(disc, b * b, 1.0 / (4.0 * a)) {
        return match project_onto_line(center, p1, p2) {
            Some((t, foot)) if in_unit_interval(t) => vec![foot.rounded()],
            _ => Vec::new(),
        };
    }
    if disc < 0.0 { return Vec::new(); }

    let e = disc.sqrt();
    let mut out = Vec::with_capacity(2);
    for t in [(-b + e) / (2.0 * a), (-b - e) / (2.0 * a)] {
        if in_unit_interval(t) { out.push((p1 + d * t).rounded()); }
    }
    out
}

/// Circle-circle via the chord foot and half-chord. Disjoint, nested and concentric
/// (including coincident) circles yield nothing; tangent circles yield the touch point twice.
pub fn circle_circle(c1: Point, r1: f64, c2: Point, r2: f64) -> Vec<Point> {
    let delta = c2 - c1;
    let d = delta.x.hypot(delta.y);
    if d == 0.0 || d > r1 + r2 || d < (r1 - r2).abs() { return Vec::new(); }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let foot = c1 + delta * (a / d);
    let k = h / d;
    vec![
        Point::new(foot.x - k * delta.y, foot.y + k * delta.x).rounded(),
        Point::new(foot.x + k * delta.y, foot.y - k * delta.x).rounded(),
    ]
}
