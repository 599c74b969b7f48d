//! Fan triangulation.
//!
//! The fan is anchored at the end vertex of the first edge whose interior angle is
//! reflex (> 180 degrees); convex polygons anchor at the end vertex of the first edge.
//! Anchoring at the single reflex vertex of a polygon keeps every triangle inside it.

use crate::model::Point;

/// `vertices[i]` is the start of edge `i`; `interior_angles[i]` is the angle at the end of edge `i`.
pub fn fan_triangulate(vertices: &[Point], interior_angles: &[f64]) -> Vec<[Point; 3]> {
    let n = vertices.len();
    if n < 3 || interior_angles.len() != n { return Vec::new(); }

    // End points of the edges, paired with their interior angle
    let ends: Vec<Point> = (0..n).map(|i| vertices[(i + 1) % n]).collect();
    let start = interior_angles.iter().position(|&a| a > 180.0).unwrap_or(0);
    let working: Vec<Point> = ends[start..].iter().chain(ends[..start].iter()).copied().collect();

    (1..n - 1).map(|i| [working[0], working[i], working[i + 1]]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::polygon::Polygon;

    fn pts(v: &[(f64, f64)]) -> Vec<Point> { v.iter().map(|&(x, y)| Point::new(x, y)).collect() }

    #[test]
    fn convex_fan_starts_at_second_vertex() {
        let sq = Polygon::new(pts(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)])).unwrap();
        let tris = sq.triangulate();
        assert_eq!(tris.len(), 2);
        assert!(tris.iter().all(|t| t[0] == Point::new(5.0, 0.0)));
    }

    #[test]
    fn concave_fan_starts_at_reflex_vertex() {
        let poly = Polygon::new(pts(&[(0.0, 0.0), (5.0, 0.0), (6.0, 5.0), (-4.0, 7.0), (2.0, 3.0)])).unwrap();
        let tris = poly.triangulate();
        assert_eq!(tris.len(), 3);
        assert!(tris.iter().all(|t| t[0] == Point::new(2.0, 3.0)));
        assert_eq!(tris[0][1], Point::new(0.0, 0.0));
    }

    #[test]
    fn mismatched_input_is_empty() {
        assert!(fan_triangulate(&pts(&[(0.0, 0.0), (1.0, 0.0)]), &[90.0, 90.0]).is_empty());
    }
}
