// Closed-form real roots for polynomials of degree <= 4.
// Coefficients are stored constant-term first: coefs[i] multiplies x^i.

use super::limits::MAX_POLYNOMIAL_COEFFS;
use super::math::real_cbrt;
use super::tolerance::{near_zero, EPS_ROOT};
use crate::error::{ShapeError, ShapeResult};

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefs: Vec<f64>,
}

impl Polynomial {
    /// Build from coefficients given highest degree first, e.g. `[1, -5, 6]` is `x^2 - 5x + 6`.
    pub fn new(highest_first: &[f64]) -> Polynomial {
        Polynomial { coefs: highest_first.iter().rev().copied().collect() }
    }

    /// Checked variant of [`Polynomial::new`] for untrusted input: at most five
    /// coefficients, all finite.
    pub fn try_new(highest_first: &[f64]) -> ShapeResult<Polynomial> {
        if highest_first.len() > MAX_POLYNOMIAL_COEFFS {
            return Err(ShapeError::CapsExceeded { what: "coefficients", max: MAX_POLYNOMIAL_COEFFS, got: highest_first.len() });
        }
        if highest_first.iter().any(|c| !c.is_finite()) {
            return Err(ShapeError::NonFinite("coefficients"));
        }
        Ok(Polynomial::new(highest_first))
    }

    pub fn coefficients(&self) -> &[f64] { &self.coefs }

    /// Degree after trailing near-zero leading coefficients are ignored.
    pub fn degree(&self) -> usize {
        let mut n = self.coefs.len();
        while n > 0 && near_zero(self.coefs[n - 1], EPS_ROOT) { n -= 1; }
        n.saturating_sub(1)
    }

    /// Drop leading coefficients whose magnitude is within the root tolerance.
    pub fn simplify(&mut self) {
        while let Some(&c) = self.coefs.last() {
            if near_zero(c, EPS_ROOT) { self.coefs.pop(); } else { break; }
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// All real roots. Degenerate polynomials (constant, degree > 4) yield none.
    pub fn roots(&self) -> Vec<f64> {
        let mut p = self.clone();
        p.simplify();
        let c = &p.coefs;
        match c.len() {
            2 => linear_root(c),
            3 => quadratic_roots(c),
            4 => cubic_roots(c),
            5 => quartic_roots(c),
            _ => Vec::new(),
        }
    }
}

/// Convenience over `Polynomial::new(..).roots()`; coefficients highest degree first.
pub fn get_roots(highest_first: &[f64]) -> Vec<f64> { Polynomial::new(highest_first).roots() }

fn linear_root(c: &[f64]) -> Vec<f64> {
    if c[1] == 0.0 { return Vec::new(); }
    vec![-c[0] / c[1]]
}

fn quadratic_roots(c: &[f64]) -> Vec<f64> {
    let a = c[2];
    let b = c[1] / a;
    let cc = c[0] / a;
    let disc = b * b - 4.0 * cc;
    if disc > 0.0 {
        let e = disc.sqrt();
        vec![0.5 * (-b + e), 0.5 * (-b - e)]
    } else if disc == 0.0 {
        vec![-0.5 * b]
    } else {
        Vec::new()
    }
}

// Cardano on the depressed cubic t^3 + a t + b with x = t - c2/3.
fn cubic_roots(c: &[f64]) -> Vec<f64> {
    let c3 = c[3];
    let c2 = c[2] / c3;
    let c1 = c[1] / c3;
    let c0 = c[0] / c3;

    let a = (3.0 * c1 - c2 * c2) / 3.0;
    let b = (2.0 * c2 * c2 * c2 - 9.0 * c1 * c2 + 27.0 * c0) / 27.0;
    let offset = c2 / 3.0;
    let half_b = b / 2.0;
    let mut disc = b * b / 4.0 + a * a * a / 27.0;
    if near_zero(disc, EPS_ROOT) { disc = 0.0; }

    if disc > 0.0 {
        let e = disc.sqrt();
        let root = real_cbrt(-half_b + e) + real_cbrt(-half_b - e);
        vec![root - offset]
    } else if disc < 0.0 {
        let dist = (-a / 3.0).sqrt();
        let angle = (-disc).sqrt().atan2(-half_b) / 3.0;
        let (sin, cos) = angle.sin_cos();
        let sqrt3 = 3f64.sqrt();
        vec![
            2.0 * dist * cos - offset,
            -dist * (cos + sqrt3 * sin) - offset,
            -dist * (cos - sqrt3 * sin) - offset,
        ]
    } else {
        let tmp = if half_b >= 0.0 { -real_cbrt(half_b) } else { real_cbrt(-half_b) };
        vec![2.0 * tmp - offset, -tmp - offset]
    }
}

// Ferrari via the resolvent cubic; the zero-discriminant branch avoids dividing by it.
fn quartic_roots(c: &[f64]) -> Vec<f64> {
    let c4 = c[4];
    let c3 = c[3] / c4;
    let c2 = c[2] / c4;
    let c1 = c[1] / c4;
    let c0 = c[0] / c4;

    let resolvent = Polynomial::new(&[1.0, -c2, c3 * c1 - 4.0 * c0, -c3 * c3 * c0 + 4.0 * c2 * c0 - c1 * c1]);
    let y = match resolvent.roots().first() {
        Some(&y) => y,
        None => return Vec::new(),
    };

    let mut out = Vec::with_capacity(4);
    let mut disc = c3 * c3 / 4.0 - c2 + y;
    if near_zero(disc, EPS_ROOT) { disc = 0.0; }

    if disc > 0.0 {
        let e = disc.sqrt();
        let t1 = 3.0 * c3 * c3 / 4.0 - e * e - 2.0 * c2;
        let t2 = (4.0 * c3 * c2 - 8.0 * c1 - c3 * c3 * c3) / (4.0 * e);
        let mut plus = t1 + t2;
        let mut minus = t1 - t2;
        if near_zero(plus, EPS_ROOT) { plus = 0.0; }
        if near_zero(minus, EPS_ROOT) { minus = 0.0; }
        if plus >= 0.0 {
            let f = plus.sqrt();
            out.push(-c3 / 4.0 + (e + f) / 2.0);
            out.push(-c3 / 4.0 + (e - f) / 2.0);
        }
        if minus >= 0.0 {
            let f = minus.sqrt();
            out.push(-c3 / 4.0 + (f - e) / 2.0);
            out.push(-c3 / 4.0 - (f + e) / 2.0);
        }
    } else if disc == 0.0 {
        let mut t2 = y * y - 4.0 * c0;
        if t2 >= -EPS_ROOT {
            if t2 < 0.0 { t2 = 0.0; }
            t2 = 2.0 * t2.sqrt();
            let t1 = 3.0 * c3 * c3 / 4.0 - 2.0 * c2;
            if t1 + t2 >= EPS_ROOT {
                let d = (t1 + t2).sqrt();
                out.push(-c3 / 4.0 + d / 2.0);
                out.push(-c3 / 4.0 - d / 2.0);
            }
            if t1 - t2 >= EPS_ROOT {
                let d = (t1 - t2).sqrt();
                out.push(-c3 / 4.0 + d / 2.0);
                out.push(-c3 / 4.0 - d / 2.0);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_constructor_rejects_bad_input() {
        assert_eq!(Polynomial::try_new(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap_err().code(), "caps_exceeded");
        assert_eq!(Polynomial::try_new(&[1.0, f64::NAN]).unwrap_err().code(), "non_finite");
        assert_eq!(Polynomial::try_new(&[1.0, -5.0, 6.0]).unwrap(), Polynomial::new(&[1.0, -5.0, 6.0]));
    }

    fn sorted(mut v: Vec<f64>) -> Vec<f64> {
        v.sort_by(|a, b| a.total_cmp(b));
        v
    }

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn quadratic_two_roots() {
        assert!(close(&sorted(get_roots(&[1.0, -5.0, 6.0])), &[2.0, 3.0]));
    }

    #[test]
    fn quadratic_double_root() {
        assert_eq!(get_roots(&[1.0, -4.0, 4.0]), vec![2.0]);
    }

    #[test]
    fn quadratic_no_real_roots() {
        assert!(get_roots(&[1.0, 0.0, 1.0]).is_empty());
    }

    #[test]
    fn linear_and_constant() {
        assert_eq!(get_roots(&[2.0, -4.0]), vec![2.0]);
        assert!(get_roots(&[7.0]).is_empty());
        assert!(get_roots(&[]).is_empty());
    }

    #[test]
    fn simplify_drops_negligible_leading_terms() {
        let p = Polynomial::new(&[1e-9, 1.0, -5.0, 6.0]);
        assert_eq!(p.degree(), 2);
        assert!(close(&sorted(p.roots()), &[2.0, 3.0]));
    }

    #[test]
    fn cubic_three_real_roots() {
        // (x-1)(x-2)(x-3)
        assert!(close(&sorted(get_roots(&[1.0, -6.0, 11.0, -6.0])), &[1.0, 2.0, 3.0]));
    }

    #[test]
    fn cubic_one_real_root() {
        // (x+2)(x^2+1)
        assert!(close(&get_roots(&[1.0, 2.0, 1.0, 2.0]), &[-2.0]));
    }

    #[test]
    fn cubic_repeated_root() {
        // (x-1)^2 (x+2)
        let r = sorted(get_roots(&[1.0, 0.0, -3.0, 2.0]));
        assert!(close(&r, &[-2.0, 1.0]));
    }

    #[test]
    fn quartic_four_roots() {
        // (x-1)(x-2)(x-3)(x-4)
        let r = sorted(get_roots(&[1.0, -10.0, 35.0, -50.0, 24.0]));
        assert!(close(&r, &[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn biquadratic() {
        // x^4 - 5x^2 + 4 = (x^2-1)(x^2-4)
        let r = sorted(get_roots(&[1.0, 0.0, -5.0, 0.0, 4.0]));
        assert!(close(&r, &[-2.0, -1.0, 1.0, 2.0]));
    }

    #[test]
    fn quartic_without_real_roots() {
        assert!(get_roots(&[1.0, 0.0, 0.0, 0.0, 1.0]).is_empty());
    }

    #[test]
    fn evaluate_horner() {
        let p = Polynomial::new(&[2.0, 0.0, -1.0]);
        assert_eq!(p.evaluate(3.0), 17.0);
    }
}
