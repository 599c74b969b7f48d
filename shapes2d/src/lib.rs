pub mod error;
pub mod json;
pub mod model;
pub mod geometry {
    pub mod conic;
    pub mod intersect;
    pub mod limits;
    pub mod math;
    pub mod polynomial;
    pub mod radar;
    pub mod tolerance;
}
pub mod shapes {
    pub mod arc;
    pub mod circle;
    pub mod ellipse;
    pub mod polygon;
    pub mod segment;
    pub mod shape;
}
pub mod algorithms {
    pub mod dispatch;
    pub mod triangulate;
    pub mod winding;
}

pub use error::{ShapeError, ShapeResult};
pub use geometry::polynomial::{get_roots, Polynomial};
pub use model::{Point, Vector};
pub use shapes::arc::{Arc, ArcBase, Sector};
pub use shapes::circle::Circle;
pub use shapes::ellipse::Ellipse;
pub use shapes::polygon::{Polygon, PolygonKind};
pub use shapes::segment::{are_lines_parallel, is_point_on_line, is_point_on_segment, Segment};
pub use shapes::shape::{ClosedShape2d, Shape, Shape2d, ShapeKind, ShapeRef};

/// Intersection points of any two shapes, rounded to 2 decimals and deduplicated.
pub fn intersection_points<A, B>(a: &A, b: &B) -> Vec<Point>
where
    A: Shape2d + ?Sized,
    B: Shape2d + ?Sized,
{
    algorithms::dispatch::intersection_points(a.as_shape_ref(), b.as_shape_ref())
}

/// `true` exactly when [`intersection_points`] is non-empty.
pub fn does_intersect<A, B>(a: &A, b: &B) -> bool
where
    A: Shape2d + ?Sized,
    B: Shape2d + ?Sized,
{
    algorithms::dispatch::does_intersect(a.as_shape_ref(), b.as_shape_ref())
}
