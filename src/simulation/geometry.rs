//! Geometry calculations for line-of-sight and obstacle intersection.
//!
//! Contains helper functions for:
//! - Point distance calculations (squared distance to avoid sqrt in hot paths)
//! - Closest-point-on-segment projection with clamped parameter
//! - Segment–disc intersection tests with degenerate handling
//!
//! All functions are pure predicates/computations with no hidden state:
//! calling them twice with identical inputs yields identical results.

use super::types::{Disc, Point};

/// Euclidean distance between two points in simulation units.
pub fn distance(a: &Point, b: &Point) -> f64 {
    distance2(a, b).sqrt()
}

/// Squared Euclidean distance (avoids a sqrt when only comparing).
pub fn distance2(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Find the point on the segment [a, b] closest to `p`.
///
/// Projects `p` onto the segment's supporting line and clamps the projection
/// parameter t to [0, 1] so the result always lies on the segment itself.
/// Without the clamp, short segments near a disc would over-report
/// collisions from points beyond the endpoints.
///
/// ## Degenerate Case Handling
///
/// If a == b (zero-length segment), the segment is treated as the point `a`.
pub fn closest_point_on_segment(a: &Point, b: &Point, p: &Point) -> Point {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return *a;
    }
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len2;
    let t = t.clamp(0.0, 1.0);
    Point {
        x: a.x + t * dx,
        y: a.y + t * dy,
    }
}

/// Segment vs. disc intersection test.
///
/// A segment hits a disc when:
/// 1. either endpoint lies within the disc's radius, or
/// 2. the closest point on the segment to the disc center (clamped
///    projection) lies within the radius.
///
/// Comparisons use squared distances against radius². Boundary contact
/// (distance exactly equal to the radius) counts as a hit.
///
/// # Parameters
///
/// * `p1`, `p2` - Endpoints of the segment
/// * `disc` - The obstacle disc
///
/// # Returns
///
/// `true` if the segment intersects or touches the disc.
pub fn segment_hits_disc(p1: &Point, p2: &Point, disc: &Disc) -> bool {
    let r2 = disc.radius * disc.radius;
    if distance2(p1, &disc.center) <= r2 {
        return true;
    }
    if distance2(p2, &disc.center) <= r2 {
        return true;
    }
    let closest = closest_point_on_segment(p1, p2, &disc.center);
    distance2(&closest, &disc.center) <= r2
}

/// Check if the straight connection between two points is physically blocked.
///
/// This is the main line-of-sight check used by the edge filter: a candidate
/// link between two satellites is viable only if the straight segment between
/// them clears every obstacle disc.
///
/// # Returns
///
/// `true` if any obstacle blocks the segment, `false` if the line-of-sight
/// is clear.
pub fn is_blocked(p1: &Point, p2: &Point, obstacles: &[Disc]) -> bool {
    obstacles.iter().any(|disc| segment_hits_disc(p1, p2, disc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    fn disc(x: f64, y: f64, radius: f64) -> Disc {
        Disc {
            center: p(x, y),
            radius,
        }
    }

    #[test]
    fn distance_basic() {
        assert_eq!(distance(&p(0.0, 0.0), &p(3.0, 4.0)), 5.0);
        assert_eq!(distance2(&p(1.0, 1.0), &p(1.0, 1.0)), 0.0);
    }

    #[test]
    fn closest_point_clamps_projection() {
        let a = p(0.0, 0.0);
        let b = p(10.0, 0.0);
        // Projection inside the segment
        let c = closest_point_on_segment(&a, &b, &p(5.0, 3.0));
        assert_eq!(c, p(5.0, 0.0));
        // Projection parameter > 1 clamps to b
        let c = closest_point_on_segment(&a, &b, &p(20.0, 3.0));
        assert_eq!(c, b);
        // Projection parameter < 0 clamps to a
        let c = closest_point_on_segment(&a, &b, &p(-20.0, 3.0));
        assert_eq!(c, a);
    }

    #[test]
    fn closest_point_degenerate_segment() {
        let a = p(2.0, 2.0);
        assert_eq!(closest_point_on_segment(&a, &a, &p(10.0, 10.0)), a);
    }

    #[test]
    fn segment_hits_disc_endpoint_inside() {
        let d = disc(0.0, 0.0, 5.0);
        assert!(segment_hits_disc(&p(1.0, 1.0), &p(100.0, 100.0), &d));
        assert!(segment_hits_disc(&p(100.0, 100.0), &p(1.0, 1.0), &d));
    }

    #[test]
    fn segment_hits_disc_crossing_and_near_miss() {
        let d = disc(0.0, 0.0, 5.0);
        // Horizontal segment passing straight through the disc
        assert!(segment_hits_disc(&p(-10.0, 0.0), &p(10.0, 0.0), &d));
        // Passes within the radius of the center
        assert!(segment_hits_disc(&p(-10.0, 4.0), &p(10.0, 4.0), &d));
        // Tangent contact counts as a hit
        assert!(segment_hits_disc(&p(-10.0, 5.0), &p(10.0, 5.0), &d));
        // Clear miss
        assert!(!segment_hits_disc(&p(-10.0, 6.0), &p(10.0, 6.0), &d));
    }

    #[test]
    fn segment_hits_disc_short_segment_beyond_disc() {
        // Supporting line passes through the disc but the segment ends well
        // before it. Unclamped projection would falsely report a hit.
        let d = disc(100.0, 0.0, 5.0);
        assert!(!segment_hits_disc(&p(0.0, 0.0), &p(10.0, 0.0), &d));
    }

    #[test]
    fn segment_hits_disc_degenerate_point() {
        let d = disc(0.0, 0.0, 5.0);
        assert!(segment_hits_disc(&p(1.0, 1.0), &p(1.0, 1.0), &d));
        assert!(!segment_hits_disc(&p(10.0, 10.0), &p(10.0, 10.0), &d));
    }

    #[test]
    fn is_blocked_checks_every_obstacle() {
        let obstacles = vec![disc(50.0, 50.0, 5.0), disc(0.0, 0.0, 5.0)];
        assert!(is_blocked(&p(-10.0, 0.0), &p(10.0, 0.0), &obstacles));
        assert!(!is_blocked(&p(-10.0, 20.0), &p(10.0, 20.0), &obstacles));
        assert!(!is_blocked(&p(-10.0, 20.0), &p(10.0, 20.0), &[]));
    }

    #[test]
    fn is_blocked_is_idempotent() {
        let obstacles = vec![disc(0.0, 0.0, 5.0)];
        let a = p(-10.0, 4.0);
        let b = p(10.0, 4.0);
        let first = is_blocked(&a, &b, &obstacles);
        let second = is_blocked(&a, &b, &obstacles);
        assert_eq!(first, second);
    }
}
