use serde::{Deserialize, Serialize};

use crate::geometry::intersect::{self, line_distance, project_onto_line};
use crate::geometry::math::signed_turn;
use crate::model::{Point, Vector};

/// A bounded line segment from `p1` to `p2`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Segment { Segment { p1, p2 } }

    /// Length rounded to 2 decimals.
    pub fn length(&self) -> f64 { self.p1.distance_to(self.p2) }

    pub fn centroid(&self) -> Point { Point::new((self.p1.x + self.p2.x) / 2.0, (self.p1.y + self.p2.y) / 2.0) }

    #[inline]
    pub fn direction(&self) -> Vector { self.p2 - self.p1 }

    pub fn is_vertical(&self) -> bool { self.p2.x - self.p1.x == 0.0 }

    pub fn is_horizontal(&self) -> bool { self.p2.y - self.p1.y == 0.0 }

    pub fn translate(&mut self, v: Vector) {
        self.p1.translate(v);
        self.p2.translate(v);
    }

    pub fn rotate(&mut self, degrees: f64, origin: Point) {
        self.p1.rotate(degrees, origin);
        self.p2.rotate(degrees, origin);
    }

    /// Signed turn in degrees from this direction to `other`'s direction.
    pub fn angle_to(&self, other: &Segment) -> f64 {
        let a = self.direction();
        let b = other.direction();
        signed_turn(a.x, a.y, b.x, b.y)
    }

    /// Segment from the foot of the perpendicular on this line to `p`.
    pub fn orthogonal_line_through(&self, p: Point) -> Segment {
        match project_onto_line(p, self.p1, self.p2) {
            Some((_, foot)) => Segment::new(foot, p),
            None => Segment::new(self.p1, p),
        }
    }

    /// Distance to the infinite line, rounded to an integer, within `threshold`.
    pub fn is_on_line(&self, p: Point, threshold: f64) -> bool {
        line_distance(p, self.p1, self.p2).round() <= threshold
    }

    /// On the line (see [`Segment::is_on_line`]) and inside the segment's bounding box.
    pub fn is_on_segment(&self, p: Point, threshold: f64) -> bool {
        self.is_on_line(p, threshold)
            && p.x >= self.p1.x.min(self.p2.x)
            && p.x <= self.p1.x.max(self.p2.x)
            && p.y >= self.p1.y.min(self.p2.y)
            && p.y <= self.p1.y.max(self.p2.y)
    }

    pub fn is_parallel_to(&self, other: &Segment) -> bool {
        intersect::are_parallel(self.p1, self.p2, other.p1, other.p2)
    }

    /// Where the infinite lines through both segments meet.
    pub fn line_intersection(&self, other: &Segment) -> Option<Point> {
        intersect::line_line(self.p1, self.p2, other.p1, other.p2)
    }

    pub fn segment_intersection(&self, other: &Segment) -> Option<Point> {
        intersect::segment_segment(self.p1, self.p2, other.p1, other.p2)
    }
}

/// Free-function form of [`Segment::is_on_segment`].
pub fn is_point_on_segment(p: Point, segment: &Segment, threshold: f64) -> bool { segment.is_on_segment(p, threshold) }

/// Free-function form of [`Segment::is_on_line`].
pub fn is_point_on_line(p: Point, segment: &Segment, threshold: f64) -> bool { segment.is_on_line(p, threshold) }

pub fn are_lines_parallel(a: &Segment, b: &Segment) -> bool { a.is_parallel_to(b) }
