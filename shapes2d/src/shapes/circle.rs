use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::geometry::tolerance::round2;
use crate::model::{Point, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point, radius: f64) -> Circle { Circle { center, radius } }

    pub fn diameter(&self) -> f64 { self.radius * 2.0 }

    pub(crate) fn exact_area(&self) -> f64 { PI * self.radius * self.radius }

    pub(crate) fn exact_perimeter(&self) -> f64 { 2.0 * PI * self.radius }

    /// Area rounded to 2 decimals.
    pub fn area(&self) -> f64 { round2(self.exact_area()) }

    /// Circumference rounded to 2 decimals.
    pub fn perimeter(&self) -> f64 { round2(self.exact_perimeter()) }

    pub fn contains(&self, p: Point) -> bool { self.radius >= self.center.distance_to(p) }

    pub fn is_on_edge(&self, p: Point, threshold: f64) -> bool {
        (self.radius - self.center.distance_to(p)).abs() <= threshold
    }

    pub fn translate(&mut self, v: Vector) { self.center.translate(v); }

    pub fn rotate(&mut self, degrees: f64, origin: Point) { self.center.rotate(degrees, origin); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures() {
        let c = Circle::new(Point::ORIGIN, 5.0);
        assert_eq!(c.area(), 78.54);
        assert_eq!(c.perimeter(), 31.42);
        assert_eq!(c.diameter(), 10.0);
    }

    #[test]
    fn containment_and_edge() {
        let c = Circle::new(Point::new(1.0, 1.0), 5.0);
        assert!(c.contains(Point::new(4.0, 5.0)));
        assert!(c.is_on_edge(Point::new(4.0, 5.0), 0.0));
        assert!(c.contains(Point::new(2.0, 2.0)));
        assert!(!c.is_on_edge(Point::new(2.0, 2.0), 1.0));
        assert!(!c.contains(Point::new(7.0, 7.0)));
    }

    #[test]
    fn rotate_moves_center_only() {
        let mut c = Circle::new(Point::new(10.0, 0.0), 2.0);
        c.rotate(90.0, Point::ORIGIN);
        assert_eq!(c.center, Point::new(0.0, 10.0));
        assert_eq!(c.radius, 2.0);
    }
}
