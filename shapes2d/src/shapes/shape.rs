use super::arc::{Arc, ArcBase, Sector};
use super::circle::Circle;
use super::ellipse::Ellipse;
use super::polygon::Polygon;
use super::segment::Segment;
use crate::algorithms::dispatch;
use crate::model::{Point, Vector};

/// Shape kinds in canonical dispatch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Segment,
    Polygon,
    Circle,
    Ellipse,
    Arc,
    Sector,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Segment => "segment",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Arc => "arc",
            ShapeKind::Sector => "sector",
        }
    }
}

/// Owned shape of any kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Segment(Segment),
    Polygon(Polygon),
    Circle(Circle),
    Ellipse(Ellipse),
    Arc(Arc),
    Sector(Sector),
}

/// Borrowed view used by the intersection dispatcher.
#[derive(Clone, Copy, Debug)]
pub enum ShapeRef<'a> {
    Segment(&'a Segment),
    Polygon(&'a Polygon),
    Circle(&'a Circle),
    Ellipse(&'a Ellipse),
    Arc(&'a Arc),
    Sector(&'a Sector),
}

impl ShapeRef<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeRef::Segment(_) => ShapeKind::Segment,
            ShapeRef::Polygon(_) => ShapeKind::Polygon,
            ShapeRef::Circle(_) => ShapeKind::Circle,
            ShapeRef::Ellipse(_) => ShapeKind::Ellipse,
            ShapeRef::Arc(_) => ShapeKind::Arc,
            ShapeRef::Sector(_) => ShapeKind::Sector,
        }
    }
}

impl ArcBase {
    pub fn as_shape_ref(&self) -> ShapeRef<'_> {
        match self {
            ArcBase::Circle(c) => ShapeRef::Circle(c),
            ArcBase::Ellipse(e) => ShapeRef::Ellipse(e),
        }
    }
}

/// Capabilities shared by every shape.
pub trait Shape2d {
    fn as_shape_ref(&self) -> ShapeRef<'_>;

    fn translate(&mut self, v: Vector);

    /// Counter-clockwise rotation in degrees around `origin`.
    fn rotate(&mut self, degrees: f64, origin: Point);

    fn is_on_edge(&self, p: Point, threshold: f64) -> bool;

    fn intersection_points(&self, other: &dyn Shape2d) -> Vec<Point> {
        dispatch::intersection_points(self.as_shape_ref(), other.as_shape_ref())
    }

    fn does_intersect(&self, other: &dyn Shape2d) -> bool {
        dispatch::does_intersect(self.as_shape_ref(), other.as_shape_ref())
    }
}

/// Shapes that enclose a region.
pub trait ClosedShape2d: Shape2d {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
    fn contains(&self, p: Point) -> bool;
}

macro_rules! impl_shape2d {
    ($ty:ident) => {
        impl Shape2d for $ty {
            fn as_shape_ref(&self) -> ShapeRef<'_> { ShapeRef::$ty(self) }
            fn translate(&mut self, v: Vector) { $ty::translate(self, v) }
            fn rotate(&mut self, degrees: f64, origin: Point) { $ty::rotate(self, degrees, origin) }
            fn is_on_edge(&self, p: Point, threshold: f64) -> bool { $ty::is_on_edge(self, p, threshold) }
        }
    };
}

macro_rules! impl_closed {
    ($ty:ident) => {
        impl ClosedShape2d for $ty {
            fn area(&self) -> f64 { $ty::area(self) }
            fn perimeter(&self) -> f64 { $ty::perimeter(self) }
            fn contains(&self, p: Point) -> bool { $ty::contains(self, p) }
        }
    };
}

impl_shape2d!(Polygon);
impl_shape2d!(Circle);
impl_shape2d!(Ellipse);
impl_shape2d!(Arc);
impl_shape2d!(Sector);
impl_closed!(Polygon);
impl_closed!(Circle);
impl_closed!(Ellipse);
impl_closed!(Sector);

impl Shape2d for Segment {
    fn as_shape_ref(&self) -> ShapeRef<'_> { ShapeRef::Segment(self) }
    fn translate(&mut self, v: Vector) { Segment::translate(self, v) }
    fn rotate(&mut self, degrees: f64, origin: Point) { Segment::rotate(self, degrees, origin) }
    fn is_on_edge(&self, p: Point, threshold: f64) -> bool { self.is_on_segment(p, threshold) }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind { self.as_shape_ref().kind() }
}

impl Shape2d for Shape {
    fn as_shape_ref(&self) -> ShapeRef<'_> {
        match self {
            Shape::Segment(s) => ShapeRef::Segment(s),
            Shape::Polygon(p) => ShapeRef::Polygon(p),
            Shape::Circle(c) => ShapeRef::Circle(c),
            Shape::Ellipse(e) => ShapeRef::Ellipse(e),
            Shape::Arc(a) => ShapeRef::Arc(a),
            Shape::Sector(s) => ShapeRef::Sector(s),
        }
    }

    fn translate(&mut self, v: Vector) {
        match self {
            Shape::Segment(s) => s.translate(v),
            Shape::Polygon(p) => p.translate(v),
            Shape::Circle(c) => c.translate(v),
            Shape::Ellipse(e) => e.translate(v),
            Shape::Arc(a) => a.translate(v),
            Shape::Sector(s) => s.translate(v),
        }
    }

    fn rotate(&mut self, degrees: f64, origin: Point) {
        match self {
            Shape::Segment(s) => s.rotate(degrees, origin),
            Shape::Polygon(p) => p.rotate(degrees, origin),
            Shape::Circle(c) => c.rotate(degrees, origin),
            Shape::Ellipse(e) => e.rotate(degrees, origin),
            Shape::Arc(a) => a.rotate(degrees, origin),
            Shape::Sector(s) => s.rotate(degrees, origin),
        }
    }

    fn is_on_edge(&self, p: Point, threshold: f64) -> bool {
        match self {
            Shape::Segment(s) => s.is_on_segment(p, threshold),
            Shape::Polygon(x) => x.is_on_edge(p, threshold),
            Shape::Circle(c) => c.is_on_edge(p, threshold),
            Shape::Ellipse(e) => e.is_on_edge(p, threshold),
            Shape::Arc(a) => a.is_on_edge(p, threshold),
            Shape::Sector(s) => s.is_on_edge(p, threshold),
        }
    }
}

macro_rules! impl_from {
    ($ty:ident) => {
        impl From<$ty> for Shape {
            fn from(s: $ty) -> Shape { Shape::$ty(s) }
        }
    };
}

impl_from!(Segment);
impl_from!(Polygon);
impl_from!(Circle);
impl_from!(Ellipse);
impl_from!(Arc);
impl_from!(Sector);
