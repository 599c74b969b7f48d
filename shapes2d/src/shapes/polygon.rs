//! Closed polygons.
//!
//! Vertices live in one owned buffer; edge `i` runs from vertex `i` to vertex
//! `(i + 1) % n`, so moving a vertex moves both edges that share it. Triangles,
//! quadrilaterals, rectangles and squares are validated constructors that tag the
//! polygon with a [`PolygonKind`].

use serde::{Deserialize, Serialize};

use super::segment::Segment;
use crate::algorithms::triangulate::fan_triangulate;
use crate::algorithms::winding::winding_number;
use crate::error::{ShapeError, ShapeResult};
use crate::geometry::intersect::line_line;
use crate::geometry::math::{signed_area2, signed_turn};
use crate::geometry::tolerance::{round2, round_to};
use crate::model::{Point, Vector};

pub const MIN_VERTICES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PolygonKind {
    Generic,
    Triangle,
    Quadrilateral,
    Rect { width: f64, height: f64 },
    Square { width: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    kind: PolygonKind,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> ShapeResult<Polygon> {
        if vertices.len() < MIN_VERTICES {
            return Err(ShapeError::TooFewVertices { min: MIN_VERTICES, got: vertices.len() });
        }
        Ok(Polygon { vertices, kind: PolygonKind::Generic })
    }

    /// Rebuild from a closed chain of edges; each edge must start where the previous one ends.
    pub fn from_edges(edges: &[Segment]) -> ShapeResult<Polygon> {
        if edges.len() < MIN_VERTICES {
            return Err(ShapeError::TooFewVertices { min: MIN_VERTICES, got: edges.len() });
        }
        for (i, e) in edges.iter().enumerate() {
            let next = &edges[(i + 1) % edges.len()];
            if e.p2 != next.p1 {
                return Err(ShapeError::DisconnectedEdges { index: (i + 1) % edges.len() });
            }
        }
        Polygon::new(edges.iter().map(|e| e.p1).collect())
    }

    pub fn triangle(vertices: Vec<Point>) -> ShapeResult<Polygon> { Polygon::with_arity(vertices, 3, PolygonKind::Triangle) }

    pub fn quadrilateral(vertices: Vec<Point>) -> ShapeResult<Polygon> {
        Polygon::with_arity(vertices, 4, PolygonKind::Quadrilateral)
    }

    fn with_arity(vertices: Vec<Point>, expected: usize, kind: PolygonKind) -> ShapeResult<Polygon> {
        if vertices.len() != expected {
            return Err(ShapeError::VertexCount { expected, got: vertices.len() });
        }
        Ok(Polygon { vertices, kind })
    }

    /// Axis-aligned rectangle anchored at `location`, counter-clockwise for positive sizes.
    pub fn rect(location: Point, width: f64, height: f64) -> Polygon {
        let Point { x, y } = location;
        Polygon {
            vertices: vec![location, Point::new(x + width, y), Point::new(x + width, y + height), Point::new(x, y + height)],
            kind: PolygonKind::Rect { width, height },
        }
    }

    pub fn square(location: Point, width: f64) -> Polygon {
        let mut p = Polygon::rect(location, width, width);
        p.kind = PolygonKind::Square { width };
        p
    }

    pub fn kind(&self) -> PolygonKind { self.kind }

    pub fn vertices(&self) -> &[Point] { &self.vertices }

    pub fn len(&self) -> usize { self.vertices.len() }

    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        let n = self.vertices.len();
        Segment::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    /// Edges in order, the last one closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ { (0..self.vertices.len()).map(move |i| self.edge(i)) }

    /// Vertex mean; quadrilaterals use the diagonal crossing, triangles the median crossing.
    pub fn centroid(&self) -> Point {
        let v = &self.vertices;
        let crossing = match self.kind {
            PolygonKind::Triangle => {
                let m = self.medians();
                line_line(m[0].p1, m[0].p2, m[1].p1, m[1].p2)
            }
            PolygonKind::Quadrilateral | PolygonKind::Rect { .. } | PolygonKind::Square { .. } => {
                line_line(v[0], v[2], v[1], v[3])
            }
            PolygonKind::Generic => None,
        };
        crossing.unwrap_or_else(|| {
            let n = v.len() as f64;
            let (sx, sy) = v.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            Point::new(sx / n, sy / n)
        })
    }

    /// Rectangles and squares use `width * height`; triangles are rounded to 2 decimals,
    /// everything else sums the fan triangles and rounds to 1 decimal.
    pub fn area(&self) -> f64 {
        match self.kind {
            PolygonKind::Rect { width, height } => (width * height).abs(),
            PolygonKind::Square { width } => width * width,
            PolygonKind::Triangle => round2(signed_area2(&self.vertices).abs() / 2.0),
            _ => {
                let twice: f64 = self.triangulate().iter().map(|t| signed_area2(t)).sum();
                round_to(twice.abs() / 2.0, 1)
            }
        }
    }

    /// Sum of the (rounded) edge lengths, rounded to 2 decimals.
    pub fn perimeter(&self) -> f64 { round2(self.edges().map(|e| e.length()).sum()) }

    // +1 counter-clockwise, -1 clockwise
    fn orientation(&self) -> f64 { if signed_area2(&self.vertices) < 0.0 { -1.0 } else { 1.0 } }

    /// Interior angle at the end of each edge (the vertex shared with the next edge), degrees.
    pub fn interior_angles(&self) -> Vec<f64> {
        let s = self.orientation();
        let n = self.vertices.len();
        (0..n)
            .map(|i| {
                let a = self.edge(i).direction();
                let b = self.edge(i + 1).direction();
                round2(180.0 - s * signed_turn(a.x, a.y, b.x, b.y))
            })
            .collect()
    }

    pub fn is_concave(&self) -> bool { self.interior_angles().iter().any(|&a| a > 180.0) }

    pub fn is_convex(&self) -> bool { !self.is_concave() }

    pub fn is_equiangular(&self) -> bool {
        let angles = self.interior_angles();
        angles.windows(2).all(|w| w[0] == w[1])
    }

    pub fn is_equilateral(&self) -> bool {
        let lengths: Vec<f64> = self.edges().map(|e| e.length()).collect();
        lengths.windows(2).all(|w| w[0] == w[1])
    }

    /// Fan triangulation anchored at the first reflex vertex, see [`fan_triangulate`].
    pub fn triangulate(&self) -> Vec<[Point; 3]> { fan_triangulate(&self.vertices, &self.interior_angles()) }

    pub fn is_on_edge(&self, p: Point, threshold: f64) -> bool { self.edges().any(|e| e.is_on_segment(p, threshold)) }

    /// Inside by the non-zero winding rule, or on an edge.
    pub fn contains(&self, p: Point) -> bool { winding_number(p, &self.vertices) != 0 || self.is_on_edge(p, 0.0) }

    pub fn translate(&mut self, v: Vector) {
        for p in &mut self.vertices {
            p.translate(v);
        }
    }

    pub fn rotate(&mut self, degrees: f64, origin: Point) {
        for p in &mut self.vertices {
            p.rotate(degrees, origin);
        }
    }

    // Triangle helpers; they read the first three vertices.

    /// Vertex-to-opposite-midpoint segments.
    pub fn medians(&self) -> [Segment; 3] {
        let (e0, e1, e2) = (self.edge(0), self.edge(1), self.edge(2));
        [
            Segment::new(e0.p1, e1.centroid()),
            Segment::new(e1.p1, e2.centroid()),
            Segment::new(e2.p1, e0.centroid()),
        ]
    }

    /// Center of the circumscribed circle; `None` for collinear vertices.
    pub fn circumcenter(&self) -> Option<Point> {
        let (a, b, c) = (self.vertices[0], self.vertices[1], self.vertices[2]);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d == 0.0 { return None; }
        let (aa, bb, cc) = (a.x * a.x + a.y * a.y, b.x * b.x + b.y * b.y, c.x * c.x + c.y * c.y);
        let ux = (aa * (b.y - c.y) + bb * (c.y - a.y) + cc * (a.y - b.y)) / d;
        let uy = (aa * (c.x - b.x) + bb * (a.x - c.x) + cc * (b.x - a.x)) / d;
        Some(Point::new(ux, uy).rounded())
    }

    /// Crossing of the altitudes.
    pub fn orthocenter(&self) -> Option<Point> {
        let (a, b, c) = (self.vertices[0], self.vertices[1], self.vertices[2]);
        let perp = |v: Vector| Vector::new(-v.y, v.x);
        let alt_a = perp(c - b);
        let alt_b = perp(a - c);
        line_line(a, a + alt_a, b, b + alt_b)
    }

    pub fn is_right(&self) -> bool { self.vertices.len() == 3 && self.interior_angles().iter().any(|&a| a == 90.0) }

    /// Exactly two equal sides (by rounded length).
    pub fn is_isosceles(&self) -> bool {
        if self.vertices.len() != 3 || self.is_equilateral() { return false; }
        let l: Vec<f64> = self.edges().map(|e| e.length()).collect();
        l[0] == l[1] || l[0] == l[2] || l[1] == l[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(f64, f64)]) -> Vec<Point> { v.iter().map(|&(x, y)| Point::new(x, y)).collect() }

    #[test]
    fn rejects_too_few_vertices() {
        let err = Polygon::new(pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap_err();
        assert_eq!(err, ShapeError::TooFewVertices { min: 3, got: 2 });
        assert!(Polygon::triangle(pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])).is_err());
        assert!(Polygon::quadrilateral(pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])).is_err());
    }

    #[test]
    fn edges_close_the_ring() {
        let p = Polygon::new(pts(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)])).unwrap();
        let edges: Vec<Segment> = p.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], Segment::new(Point::new(5.0, 5.0), Point::new(0.0, 0.0)));
    }

    #[test]
    fn from_edges_round_trips_vertices() {
        let p = Polygon::new(pts(&[(0.0, 0.0), (5.0, 0.0), (6.0, 5.0), (-4.0, 7.0)])).unwrap();
        let edges: Vec<Segment> = p.edges().collect();
        let q = Polygon::from_edges(&edges).unwrap();
        assert_eq!(q.vertices(), p.vertices());
    }

    #[test]
    fn from_edges_rejects_gaps() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(5.0, 0.0);
        let c = Point::new(5.0, 5.0);
        let edges = [Segment::new(a, b), Segment::new(b, c), Segment::new(Point::new(4.0, 4.0), a)];
        assert_eq!(Polygon::from_edges(&edges), Err(ShapeError::DisconnectedEdges { index: 2 }));
    }

    #[test]
    fn translate_moves_shared_edges() {
        let mut p = Polygon::square(Point::ORIGIN, 2.0);
        p.translate(Vector::new(1.0, 1.0));
        assert_eq!(p.edge(0).p2, p.edge(1).p1);
        assert_eq!(p.edge(1).p1, Point::new(3.0, 1.0));
    }

    #[test]
    fn square_measures() {
        let p = Polygon::new(pts(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)])).unwrap();
        assert_eq!(p.area(), 25.0);
        assert_eq!(p.perimeter(), 20.0);
        assert_eq!(p.centroid(), Point::new(2.5, 2.5));
        assert_eq!(p.interior_angles(), vec![90.0; 4]);
        assert!(p.is_convex() && p.is_equiangular() && p.is_equilateral());
    }

    #[test]
    fn concave_measures() {
        let p = Polygon::new(pts(&[(0.0, 0.0), (5.0, 0.0), (6.0, 5.0), (-4.0, 7.0), (2.0, 3.0)])).unwrap();
        assert_eq!(p.centroid(), Point::new(1.8, 3.0));
        assert_eq!(p.area(), 30.5);
        assert!(p.is_concave());
        assert!(p.contains(Point::new(4.0, 3.0)));
        assert!(!p.contains(Point::new(0.0, 3.0)));
    }

    #[test]
    fn clockwise_orientation_gives_same_angles() {
        let ccw = Polygon::new(pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)])).unwrap();
        let cw = Polygon::new(pts(&[(4.0, 3.0), (4.0, 0.0), (0.0, 0.0)])).unwrap();
        let mut a = ccw.interior_angles();
        let mut b = cw.interior_angles();
        a.sort_by(|x, y| x.total_cmp(y));
        b.sort_by(|x, y| x.total_cmp(y));
        assert_eq!(a, b);
        assert!((a.iter().sum::<f64>() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn rect_and_square() {
        let r = Polygon::rect(Point::new(1.0, 3.0), 10.0, 20.0);
        assert_eq!(r.vertices()[2], Point::new(11.0, 23.0));
        assert_eq!(r.area(), 200.0);
        assert_eq!(r.centroid(), Point::new(6.0, 13.0));
        let s = Polygon::square(Point::ORIGIN, 4.0);
        assert_eq!(s.kind(), PolygonKind::Square { width: 4.0 });
        assert_eq!(s.area(), 16.0);
    }

    #[test]
    fn right_isosceles_triangle() {
        let t = Polygon::triangle(pts(&[(0.0, 0.0), (0.0, 5.0), (5.0, 0.0)])).unwrap();
        assert_eq!(t.centroid(), Point::new(1.67, 1.67));
        assert_eq!(t.circumcenter(), Some(Point::new(2.5, 2.5)));
        assert_eq!(t.orthocenter(), Some(Point::new(0.0, 0.0)));
        assert_eq!(t.perimeter(), 17.07);
        assert_eq!(t.area(), 12.5);
        assert!(t.is_right());
        assert!(t.is_isosceles());
    }

    #[test]
    fn obtuse_isosceles_triangle() {
        let t = Polygon::triangle(pts(&[(0.0, 0.0), (6.0, 0.0), (3.0, 2.0)])).unwrap();
        assert_eq!(t.centroid(), Point::new(3.0, 0.67));
        assert_eq!(t.circumcenter(), Some(Point::new(3.0, -1.25)));
        assert_eq!(t.orthocenter(), Some(Point::new(3.0, 4.5)));
        assert_eq!(t.perimeter(), 13.22);
        assert_eq!(t.area(), 6.0);
        assert!(!t.is_right());
        assert!(t.is_isosceles());
    }

    #[test]
    fn scalene_triangle() {
        let t = Polygon::triangle(pts(&[(0.0, 0.0), (0.0, 6.0), (3.0, 2.0)])).unwrap();
        assert_eq!(t.centroid(), Point::new(1.0, 2.67));
        assert_eq!(t.circumcenter(), Some(Point::new(0.17, 3.0)));
        assert_eq!(t.orthocenter(), Some(Point::new(2.67, 2.0)));
        assert_eq!(t.perimeter(), 14.61);
        assert_eq!(t.area(), 9.0);
        assert!(!t.is_isosceles());
    }
}
