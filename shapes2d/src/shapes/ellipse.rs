use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::geometry::tolerance::round2;
use crate::model::{Point, Vector};

/// Axis-aligned ellipse; `width` and `height` are full diameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Ellipse {
    #[inline]
    pub const fn new(center: Point, width: f64, height: f64) -> Ellipse { Ellipse { center, width, height } }

    /// Build from semi-axes.
    pub fn from_radii(center: Point, rx: f64, ry: f64) -> Ellipse { Ellipse::new(center, rx * 2.0, ry * 2.0) }

    #[inline] pub fn rx(&self) -> f64 { self.width / 2.0 }
    #[inline] pub fn ry(&self) -> f64 { self.height / 2.0 }

    pub(crate) fn exact_area(&self) -> f64 { PI * self.rx() * self.ry() }

    // Quadratic-mean approximation of the circumference
    pub(crate) fn exact_perimeter(&self) -> f64 {
        let (a, b) = (self.rx(), self.ry());
        2.0 * PI * ((a * a + b * b) / 2.0).sqrt()
    }

    pub fn area(&self) -> f64 { round2(self.exact_area()) }

    pub fn perimeter(&self) -> f64 { round2(self.exact_perimeter()) }

    /// Linear eccentricity (center-to-focus distance), rounded to 2 decimals.
    pub fn eccentricity(&self) -> f64 {
        let major = self.rx().max(self.ry());
        let minor = self.rx().min(self.ry());
        round2((major * major - minor * minor).sqrt())
    }

    /// Foci on the major axis.
    pub fn foci(&self) -> (Point, Point) {
        let e = self.eccentricity();
        let c = self.center;
        if self.width >= self.height {
            (Point::new(c.x - e, c.y), Point::new(c.x + e, c.y))
        } else {
            (Point::new(c.x, c.y - e), Point::new(c.x, c.y + e))
        }
    }

    // Normalized implicit value: 1 on the curve, < 1 inside
    fn checkpoint(&self, p: Point) -> f64 {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx * dx / (self.rx() * self.rx()) + dy * dy / (self.ry() * self.ry())
    }

    pub fn contains(&self, p: Point) -> bool { self.checkpoint(p) <= 1.0 }

    pub fn is_on_edge(&self, p: Point, threshold: f64) -> bool { (self.checkpoint(p) - 1.0).abs() <= threshold }

    pub fn translate(&mut self, v: Vector) { self.center.translate(v); }

    pub fn rotate(&mut self, degrees: f64, origin: Point) { self.center.rotate(degrees, origin); }
}
