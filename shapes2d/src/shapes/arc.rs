//! Arcs and sectors.
//!
//! An arc is described by its two end points and a center. It is circular when both
//! end points sit at the same (2-decimal) distance from the center, elliptical
//! otherwise. The span is the unsigned angle between `center->from` and `center->to`,
//! so it never exceeds 180 degrees.

use serde::{Deserialize, Serialize};

use super::circle::Circle;
use super::ellipse::Ellipse;
use super::segment::Segment;
use crate::geometry::math::dist;
use crate::geometry::radar::{is_point_in_radar_with_span, span};
use crate::geometry::tolerance::round2;
use crate::model::{Point, Vector};

/// The full conic an arc is cut from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcBase {
    Circle(Circle),
    Ellipse(Ellipse),
}

impl ArcBase {
    fn exact_area(&self) -> f64 {
        match self {
            ArcBase::Circle(c) => c.exact_area(),
            ArcBase::Ellipse(e) => e.exact_area(),
        }
    }

    fn exact_perimeter(&self) -> f64 {
        match self {
            ArcBase::Circle(c) => c.exact_perimeter(),
            ArcBase::Ellipse(e) => e.exact_perimeter(),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        match self {
            ArcBase::Circle(c) => c.contains(p),
            ArcBase::Ellipse(e) => e.contains(p),
        }
    }

    pub fn is_on_edge(&self, p: Point, threshold: f64) -> bool {
        match self {
            ArcBase::Circle(c) => c.is_on_edge(p, threshold),
            ArcBase::Ellipse(e) => e.is_on_edge(p, threshold),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub from: Point,
    pub to: Point,
    pub center: Point,
}

impl Arc {
    #[inline]
    pub const fn new(from: Point, to: Point, center: Point) -> Arc { Arc { from, to, center } }

    pub fn is_circular(&self) -> bool { self.center.distance_to(self.from) == self.center.distance_to(self.to) }

    /// An end point sitting on the center leaves no curve to intersect.
    pub fn is_degenerate(&self) -> bool { self.from == self.center || self.to == self.center }

    /// Circle or axis-aligned ellipse through both end points. For an elliptical arc
    /// the end point whose offset is more horizontal fixes the x semi-axis.
    pub fn base(&self) -> ArcBase {
        let r_from = dist(self.center, self.from);
        let r_to = dist(self.center, self.to);
        if self.is_circular() {
            return ArcBase::Circle(Circle::new(self.center, r_from));
        }
        let off = self.from - self.center;
        let (rx, ry) = if off.x.abs() >= off.y.abs() { (r_from, r_to) } else { (r_to, r_from) };
        ArcBase::Ellipse(Ellipse::from_radii(self.center, rx, ry))
    }

    /// Span in degrees, rounded to 2 decimals.
    pub fn angle(&self) -> f64 { span(self.from, self.to, self.center) }

    fn exact_length(&self) -> f64 { self.base().exact_perimeter() * self.angle() / 360.0 }

    /// Arc length rounded to 2 decimals.
    pub fn length(&self) -> f64 { round2(self.exact_length()) }

    /// True when `p`'s bearing from the center falls inside the span.
    pub fn in_radar(&self, p: Point) -> bool {
        is_point_in_radar_with_span(p, self.from, self.to, self.center, self.angle())
    }

    pub fn is_on_edge(&self, p: Point, threshold: f64) -> bool { self.in_radar(p) && self.base().is_on_edge(p, threshold) }

    pub fn translate(&mut self, v: Vector) {
        self.from.translate(v);
        self.to.translate(v);
        self.center.translate(v);
    }

    pub fn rotate(&mut self, degrees: f64, origin: Point) {
        self.from.rotate(degrees, origin);
        self.to.rotate(degrees, origin);
        self.center.rotate(degrees, origin);
    }
}

/// Pie slice: an arc closed by its two radii.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub arc: Arc,
}

impl Sector {
    pub const fn new(from: Point, to: Point, center: Point) -> Sector { Sector { arc: Arc::new(from, to, center) } }

    /// `center->from` and `center->to`.
    pub fn radii(&self) -> [Segment; 2] {
        [Segment::new(self.arc.center, self.arc.from), Segment::new(self.arc.center, self.arc.to)]
    }

    pub fn angle(&self) -> f64 { self.arc.angle() }

    pub fn area(&self) -> f64 { round2(self.arc.base().exact_area() * self.angle() / 360.0) }

    pub fn perimeter(&self) -> f64 {
        let a = &self.arc;
        round2(a.exact_length() + dist(a.center, a.from) + dist(a.center, a.to))
    }

    pub fn contains(&self, p: Point) -> bool { self.arc.in_radar(p) && self.arc.base().contains(p) }

    /// On the curved edge or on one of the radii.
    pub fn is_on_edge(&self, p: Point, threshold: f64) -> bool {
        self.arc.is_on_edge(p, threshold) || self.radii().iter().any(|r| r.is_on_segment(p, threshold))
    }

    pub fn translate(&mut self, v: Vector) { self.arc.translate(v); }

    pub fn rotate(&mut self, degrees: f64, origin: Point) { self.arc.rotate(degrees, origin); }
}
