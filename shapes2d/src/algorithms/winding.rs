//! Winding number calculation for point-in-polygon testing.
//!
//! Horizontal ray casting with signed crossings.

use crate::geometry::math::cross;
use crate::model::Point;

/// Number of times the ring winds around `p`: positive counter-clockwise,
/// negative clockwise, zero outside.
pub fn winding_number(p: Point, ring: &[Point]) -> i32 {
    if ring.len() < 3 { return 0; }

    let mut winding = 0i32;
    let n = ring.len();
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if a.y <= p.y {
            // Upward crossing
            if b.y > p.y && cross(a.x - p.x, a.y - p.y, b.x - p.x, b.y - p.y) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && cross(a.x - p.x, a.y - p.y, b.x - p.x, b.y - p.y) < 0.0 {
            // Downward crossing
            winding -= 1;
        }
    }
    winding
}
