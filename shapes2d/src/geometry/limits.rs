// Centralized ingestion limits to harden against untrusted shape documents (JSON/wasm)

pub const MAX_POLYGON_VERTICES: usize = 100_000;
pub const MAX_POLYNOMIAL_COEFFS: usize = 5; // degree <= 4

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 = 10_000_000.0;
pub const EXTENT_MAX: f64 = 20_000_000.0; // radius / width / height

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_extent_bounds(r: f64) -> bool { r.is_finite() && r >= 0.0 && r <= EXTENT_MAX }
