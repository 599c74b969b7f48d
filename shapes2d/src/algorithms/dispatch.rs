//! Shape-pair dispatch.
//!
//! Pairs are resolved by priority: sectors first (arc plus both radii), then arcs
//! (solve against the base conic, keep what passes every radar test involved), then
//! polygons (one pass per edge), then the primitive pairs. A pair whose higher-priority
//! member sits on the right is swapped, so both argument orders run the same code.

use std::collections::HashSet;

use crate::geometry::conic::{ellipse_ellipse, segment_ellipse};
use crate::geometry::intersect::{circle_circle, segment_circle};
use crate::model::Point;
use crate::shapes::arc::{Arc, Sector};
use crate::shapes::shape::ShapeRef;

/// Deduplicated intersection points of two shapes of any kind.
pub fn intersection_points(a: ShapeRef<'_>, b: ShapeRef<'_>) -> Vec<Point> {
    let points = dedup(raw_points(a, b));
    tracing::trace!(a = a.kind().as_str(), b = b.kind().as_str(), count = points.len(), "intersection_points");
    points
}

pub fn does_intersect(a: ShapeRef<'_>, b: ShapeRef<'_>) -> bool { !intersection_points(a, b).is_empty() }

/// Drop repeated points on the output grid, keeping the first occurrence.
pub fn dedup(points: Vec<Point>) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.into_iter().filter(|p| seen.insert(p.grid_key())).collect()
}

fn raw_points(a: ShapeRef<'_>, b: ShapeRef<'_>) -> Vec<Point> {
    use ShapeRef as S;
    match (a, b) {
        (_, S::Sector(sector)) => sector_points(a, sector),
        (S::Sector(_), _) => raw_points(b, a),

        (_, S::Arc(arc)) => arc_points(a, arc),
        (S::Arc(_), _) => raw_points(b, a),

        (S::Polygon(poly), _) => {
            let mut out = Vec::new();
            for edge in poly.edges() {
                out.extend(raw_points(S::Segment(&edge), b));
            }
            out
        }
        (_, S::Polygon(_)) => raw_points(b, a),

        (S::Segment(s), S::Segment(t)) => s.segment_intersection(t).into_iter().collect(),
        (S::Segment(s), S::Circle(c)) => segment_circle(s.p1, s.p2, c.center, c.radius),
        (S::Segment(s), S::Ellipse(e)) => segment_ellipse(s.p1, s.p2, e.center, e.rx(), e.ry()),
        (S::Circle(_), S::Segment(_)) | (S::Ellipse(_), S::Segment(_)) => raw_points(b, a),

        (S::Circle(c), S::Circle(d)) => circle_circle(c.center, c.radius, d.center, d.radius),
        (S::Circle(c), S::Ellipse(e)) => ellipse_ellipse(c.center, c.radius, c.radius, e.center, e.rx(), e.ry()),
        (S::Ellipse(_), S::Circle(_)) => raw_points(b, a),
        (S::Ellipse(e), S::Ellipse(f)) => ellipse_ellipse(e.center, e.rx(), e.ry(), f.center, f.rx(), f.ry()),
    }
}

// Base conic of the arc against `other`; an arc on the other side is reduced to its base
// as well and both radar tests apply.
fn arc_points(other: ShapeRef<'_>, arc: &Arc) -> Vec<Point> {
    if arc.is_degenerate() { return Vec::new(); }
    let base = arc.base();
    let candidates = match other {
        ShapeRef::Arc(o) if o.is_degenerate() => Vec::new(),
        ShapeRef::Arc(o) => {
            let other_base = o.base();
            let mut pts = raw_points(other_base.as_shape_ref(), base.as_shape_ref());
            pts.retain(|&p| o.in_radar(p));
            pts
        }
        _ => raw_points(other, base.as_shape_ref()),
    };
    candidates.into_iter().filter(|&p| arc.in_radar(p)).collect()
}

// Arc first, then the radii center->from and center->to as plain segments.
fn sector_points(other: ShapeRef<'_>, sector: &Sector) -> Vec<Point> {
    let mut out = raw_points(other, ShapeRef::Arc(&sector.arc));
    for radius in sector.radii() {
        out.extend(raw_points(other, ShapeRef::Segment(&radius)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::circle::Circle;
    use crate::shapes::polygon::Polygon;
    use crate::shapes::segment::Segment;

    fn p(x: f64, y: f64) -> Point { Point::new(x, y) }

    #[test]
    fn dedup_keeps_first_and_merges_negative_zero() {
        let pts = vec![p(1.0, 0.0), p(2.0, 2.0), p(1.0, -0.0), p(2.0, 2.0)];
        assert_eq!(dedup(pts), vec![p(1.0, 0.0), p(2.0, 2.0)]);
    }

    #[test]
    fn shared_polygon_vertex_reported_once() {
        // the segment crosses the square exactly through a corner shared by two edges
        let sq = Polygon::square(p(0.0, 0.0), 5.0);
        let s = Segment::new(p(-1.0, -1.0), p(1.0, 1.0));
        let pts = intersection_points(ShapeRef::Polygon(&sq), ShapeRef::Segment(&s));
        assert_eq!(pts, vec![p(0.0, 0.0)]);
    }

    #[test]
    fn swapped_arguments_take_the_same_path() {
        let c = Circle::new(p(0.0, 0.0), 5.0);
        let s = Segment::new(p(-6.0, -6.0), p(6.0, 6.0));
        let ab = intersection_points(ShapeRef::Circle(&c), ShapeRef::Segment(&s));
        let ba = intersection_points(ShapeRef::Segment(&s), ShapeRef::Circle(&c));
        assert_eq!(ab, ba);
        assert_eq!(ab.len(), 2);
    }
}
