// Angular restriction for arcs and sectors ("radar test").
//
// A point is inside the span when the two partial angles it makes with the boundary
// rays add up to the span itself. All angles are on the 2-decimal degree grid and the
// sum is snapped back to that grid before the exact comparison.

use super::math::angle_between;
use super::tolerance::round2;
use crate::model::Point;

/// Span of the rays `center->from` and `center->to`, in degrees.
#[inline]
pub fn span(from: Point, to: Point, center: Point) -> f64 { angle_between(center, from, to) }

pub fn is_point_in_radar(point: Point, from: Point, to: Point, center: Point) -> bool {
    is_point_in_radar_with_span(point, from, to, center, span(from, to, center))
}

/// Same as [`is_point_in_radar`] with a precomputed span.
pub fn is_point_in_radar_with_span(point: Point, from: Point, to: Point, center: Point, span: f64) -> bool {
    let from_angle = angle_between(center, from, point);
    let to_angle = angle_between(center, to, point);
    round2(from_angle + to_angle) == span
}
