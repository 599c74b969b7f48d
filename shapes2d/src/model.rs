use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::geometry::tolerance::{grid_key, round2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Point { Point { x, y } }

    /// Distance rounded to 2 decimals.
    pub fn distance_to(&self, other: Point) -> f64 { round2((other.x - self.x).hypot(other.y - self.y)) }

    pub fn translate(&mut self, v: Vector) {
        self.x += v.x;
        self.y += v.y;
    }

    /// Counter-clockwise rotation by `degrees` around `origin`. The rotated offset is
    /// rounded to 2 decimals before moving back; 0 and 360 leave the point untouched.
    pub fn rotate(&mut self, degrees: f64, origin: Point) {
        if degrees == 0.0 || degrees == 360.0 { return; }
        let (s, c) = degrees.to_radians().sin_cos();
        let xo = self.x - origin.x;
        let yo = self.y - origin.y;
        self.x = round2(xo * c - yo * s) + origin.x;
        self.y = round2(yo * c + xo * s) + origin.y;
    }

    /// Snap both coordinates to the output grid.
    #[inline]
    pub fn rounded(self) -> Point { Point::new(round2(self.x), round2(self.y)) }

    /// Integer identity on the output grid; `-0.0` and `0.0` share a key.
    #[inline]
    pub fn grid_key(self) -> (i64, i64) { (grid_key(self.x), grid_key(self.y)) }

    #[inline]
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, o: Point) -> Vector { Vector::new(self.x - o.x, self.y - o.y) }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, v: Vector) -> Point { Point::new(self.x + v.x, self.y + v.y) }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point { Point::new(x, y) }
}

/// A displacement in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Vector { Vector { x, y } }

    /// Components rounded to 2 decimals.
    pub fn from_polar(magnitude: f64, degrees: f64) -> Vector {
        let (s, c) = degrees.to_radians().sin_cos();
        Vector::new(round2(magnitude * c), round2(magnitude * s))
    }

    #[inline]
    pub fn dot(self, o: Vector) -> f64 { self.x * o.x + self.y * o.y }

    #[inline]
    pub fn cross(self, o: Vector) -> f64 { self.x * o.y - self.y * o.x }

    #[inline]
    pub fn length_sq(self) -> f64 { self.dot(self) }

    pub fn magnitude(self) -> f64 { round2(self.x.hypot(self.y)) }

    /// Angle from the x axis in degrees (-90..=90, slope angle), rounded to 2 decimals.
    pub fn angle(self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 { return 0.0; }
        round2((self.y / self.x).atan().to_degrees())
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, o: Vector) -> Vector { Vector::new(self.x + o.x, self.y + o.y) }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, o: Vector) -> Vector { Vector::new(self.x - o.x, self.y - o.y) }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, k: f64) -> Vector { Vector::new(self.x * k, self.y * k) }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector { Vector::new(-self.x, -self.y) }
}
