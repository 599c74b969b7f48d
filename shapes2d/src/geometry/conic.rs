// Axis-aligned ellipses as implicit conics: A x^2 + B xy + C y^2 + D x + E y + F = 0.
// Ellipse-ellipse goes through the Bezout resultant (quartic in y); segment-ellipse
// rescales the problem onto the unit circle.

use super::polynomial::Polynomial;
use super::tolerance::{in_unit_interval, is_tangent, CONIC_CHECK};
use crate::model::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Conic {
    /// Ellipse with the given center and semi-axes; `B` is always zero.
    pub fn ellipse(center: Point, rx: f64, ry: f64) -> Conic {
        let (cx, cy) = (center.x, center.y);
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        Conic {
            a: ry2,
            b: 0.0,
            c: rx2,
            d: -2.0 * ry2 * cx,
            e: -2.0 * rx2 * cy,
            f: ry2 * cx * cx + rx2 * cy * cy - rx2 * ry2,
        }
    }

    #[inline]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        (self.a * x + self.b * y + self.d) * x + (self.c * y + self.e) * y + self.f
    }

    /// Residual scale used to accept a candidate point.
    #[inline]
    fn check_norm(&self) -> f64 { (self.a * self.a + 2.0 * self.b * self.b + self.c * self.c) * CONIC_CHECK }

    fn as_array(&self) -> [f64; 6] { [self.a, self.b, self.c, self.d, self.e, self.f] }
}

/// Resultant of two conics after eliminating x: a quartic in y, highest degree first.
pub fn bezout(p: &Conic, q: &Conic) -> Polynomial {
    let e1 = p.as_array();
    let e2 = q.as_array();
    let det = |i: usize, j: usize| e1[i] * e2[j] - e2[i] * e1[j];
    let ab = det(0, 1);
    let ac = det(0, 2);
    let ad = det(0, 3);
    let ae = det(0, 4);
    let af = det(0, 5);
    let bc = det(1, 2);
    let be = det(1, 4);
    let bf = det(1, 5);
    let cd = det(2, 3);
    let de = det(3, 4);
    let df = det(3, 5);
    let bf_plus_de = bf + de;
    let be_minus_cd = be - cd;

    Polynomial::new(&[
        ab * bc - ac * ac,
        ab * be_minus_cd + ad * bc - 2.0 * ac * ae,
        ab * bf_plus_de + ad * be_minus_cd - ae * ae - 2.0 * ac * af,
        ab * df + ad * bf_plus_de - 2.0 * ae * af,
        ad * df - af * af,
    ])
}

/// Intersections of two axis-aligned ellipses given by centers and semi-axes.
/// Resultant roots that do not satisfy both conics are discarded.
pub fn ellipse_ellipse(c1: Point, rx1: f64, ry1: f64, c2: Point, rx2: f64, ry2: f64) -> Vec<Point> {
    if rx1 == 0.0 || ry1 == 0.0 || rx2 == 0.0 || ry2 == 0.0 { return Vec::new(); }
    let p = Conic::ellipse(c1, rx1, ry1);
    let q = Conic::ellipse(c2, rx2, ry2);
    let norm_p = p.check_norm();
    let norm_q = q.check_norm();

    let mut out = Vec::new();
    for y in bezout(&p, &q).roots() {
        let xs = Polynomial::new(&[p.a, p.d + y * p.b, p.f + y * (p.e + y * p.c)]).roots();
        for x in xs {
            if p.eval(x, y).abs() < norm_p && q.eval(x, y).abs() < norm_q {
                out.push(Point::new(x, y).rounded());
            } else {
                tracing::trace!(x, y, "discarding spurious resultant root");
            }
        }
    }
    out
}

/// Segment p1->p2 against an axis-aligned ellipse, solved in the space where the
/// ellipse is the unit circle.
pub fn segment_ellipse(p1: Point, p2: Point, center: Point, rx: f64, ry: f64) -> Vec<Point> {
    if rx == 0.0 || ry == 0.0 { return Vec::new(); }
    let dir = p2 - p1;
    let diff = p1 - center;
    let (sx, sy) = (1.0 / (rx * rx), 1.0 / (ry * ry));
    let m_dir = (dir.x * sx, dir.y * sy);
    let m_diff = (diff.x * sx, diff.y * sy);

    let a = dir.x * m_dir.0 + dir.y * m_dir.1;
    let b = dir.x * m_diff.0 + dir.y * m_diff.1;
    let c = diff.x * m_diff.0 + diff.y * m_diff.1 - 1.0;
    if a == 0.0 { return Vec::new(); }
    let d = b * b - a * c;

    // d / a is the squared half-chord in unit-circle space; scale back by the minor radius
    let minor = rx.abs().min(ry.abs());
    let ts: Vec<f64> = if is_tangent(d, b * b, minor * minor / a) {
        vec![-b / a]
    } else if d > 0.0 {
        let root = d.sqrt();
        vec![(-b - root) / a, (-b + root) / a]
    } else {
        Vec::new()
    };

    ts.into_iter().filter(|&t| in_unit_interval(t)).map(|t| (p1 + dir * t).rounded()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point { Point::new(x, y) }

    #[test]
    fn conic_vanishes_on_ellipse() {
        let c = Conic::ellipse(p(2.0, 1.0), 3.0, 2.0);
        assert!(c.eval(5.0, 1.0).abs() < 1e-9);
        assert!(c.eval(2.0, 3.0).abs() < 1e-9);
        assert!(c.eval(2.0, 1.0) < 0.0);
    }

    #[test]
    fn vertical_segment_through_ellipse() {
        let r = segment_ellipse(p(0.0, -3.0), p(0.0, 3.0), p(0.0, 0.0), 2.5, 1.5);
        assert_eq!(r, vec![p(0.0, -1.5), p(0.0, 1.5)]);
    }

    #[test]
    fn segment_ending_inside_ellipse() {
        let r = segment_ellipse(p(-5.0, 0.0), p(0.0, 0.0), p(0.0, 0.0), 2.5, 1.5);
        assert_eq!(r, vec![p(-2.5, 0.0)]);
    }

    #[test]
    fn segment_missing_ellipse() {
        assert!(segment_ellipse(p(-5.0, 0.0), p(0.0, 5.0), p(0.0, 0.0), 2.5, 1.5).is_empty());
    }

    #[test]
    fn ellipse_against_circle() {
        let r = ellipse_ellipse(p(100.0, 100.0), 50.0, 30.0, p(150.0, 100.0), 25.0, 25.0);
        assert_eq!(r, vec![p(136.08, 120.77), p(136.08, 79.23)]);
    }

    #[test]
    fn nested_ellipses_do_not_meet() {
        assert!(ellipse_ellipse(p(0.0, 0.0), 2.5, 1.5, p(0.0, 0.0), 3.0, 3.0).is_empty());
    }

    #[test]
    fn circles_as_ellipses() {
        let mut r = ellipse_ellipse(p(0.0, 0.0), 5.0, 5.0, p(3.0, 0.0), 5.0, 5.0);
        r.sort_by(|a, b| a.y.total_cmp(&b.y));
        assert_eq!(r, vec![p(1.5, -4.77), p(1.5, 4.77)]);
    }

    #[test]
    fn flat_ellipse_has_no_curve() {
        assert!(ellipse_ellipse(p(0.0, 0.0), 0.0, 1.0, p(0.0, 10.0), 1.0, 1.0).is_empty());
        assert!(ellipse_ellipse(p(0.0, 10.0), 1.0, 1.0, p(0.0, 0.0), 2.0, 0.0).is_empty());
    }

    #[test]
    fn long_segment_keeps_a_short_chord() {
        // half-chord 0.03 just under the top of the ellipse
        let y = 3.0 * (1.0f64 - 3.6e-5).sqrt();
        let r = segment_ellipse(p(-1000.0, y), p(1000.0, y), p(0.0, 0.0), 5.0, 3.0);
        assert_eq!(r, vec![p(-0.03, 3.0), p(0.03, 3.0)]);
        let r = segment_ellipse(p(-1000.0, 3.0), p(1000.0, 3.0), p(0.0, 0.0), 5.0, 3.0);
        assert_eq!(r, vec![p(0.0, 3.0)]);
    }
}
