// Centralized tolerances and rounding policy for the intersection engine

pub const EPS_ROOT: f64 = 1e-6;           // polynomial coefficient / discriminant snap
pub const EPS_PARAM: f64 = 1e-9;          // segment parameter slack around [0,1]
pub const EPS_TANGENT: f64 = 1e-9;        // squared half-chord (length units) treated as tangency
pub const EPS_CANCEL: f64 = 1e-14;        // rounding floor of b^2 - 4ac relative to b^2
pub const CONIC_CHECK: f64 = 1e-3;        // scale of the conic residual check

// Output grid: coordinates are rounded to 2 decimals (0.01)
pub const OUTPUT_SCALE: f64 = 100.0;

#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() <= eps }
#[inline] pub fn in_unit_interval(t: f64) -> bool { t >= -EPS_PARAM && t <= 1.0 + EPS_PARAM }

/// Round half away from zero to `decimals` places. Negative zero collapses to zero.
#[inline]
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale + 0.0
}

#[inline] pub fn round2(x: f64) -> f64 { (x * OUTPUT_SCALE).round() / OUTPUT_SCALE + 0.0 }

// Integer cell on the output grid, used for duplicate detection
#[inline] pub fn grid_key(x: f64) -> i64 { (x * OUTPUT_SCALE).round() as i64 }

/// True when a line crosses a conic along a chord too short to tell from a touch.
///
/// `disc` is the discriminant of the line-parameter quadratic, `b_sq` the squared linear
/// term it was built from and `chord_scale` turns `disc` into the squared half-chord
/// length (negative for a miss). Only the chord length and the cancellation floor of
/// `disc` decide, never how far the segment extends.
#[inline]
pub fn is_tangent(disc: f64, b_sq: f64, chord_scale: f64) -> bool {
    (disc * chord_scale).abs() <= EPS_TANGENT || disc.abs() <= EPS_CANCEL * b_sq
}
