use std::f64::consts::PI;

use super::{Line2, Point2, TOLERANCE};

/// Algebraic intersection of two 2D lines, each given by two points.
///
/// Classic determinant formula. Returns the intersection of the infinite
/// lines even where the segments themselves do not overlap, and `None`
/// when the lines are parallel.
#[must_use]
pub fn line_intersection(l1: &Line2, l2: &Line2) -> Option<Point2> {
    let [p1, p2] = l1;
    let [p3, p4] = l2;
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < TOLERANCE {
        return None;
    }
    let d1 = p1.x * p2.y - p1.y * p2.x;
    let d2 = p3.x * p4.y - p3.y * p4.x;
    Some(Point2::new(
        (d1 * (p3.x - p4.x) - (p1.x - p2.x) * d2) / denom,
        (d1 * (p3.y - p4.y) - (p1.y - p2.y) * d2) / denom,
    ))
}

/// Whether `point` lies on the right side of the directed line.
///
/// Sign of the 2D cross product of (line direction, point offset). This is
/// the crate-wide orientation convention: the front/back facing test and
/// the silhouette winding both rely on it agreeing with [`convex_hull`]'s
/// counter-clockwise output.
///
/// [`convex_hull`]: super::hull_2d::convex_hull
#[must_use]
pub fn on_right_side(line: &Line2, point: &Point2) -> bool {
    let [a, b] = line;
    (point.x - a.x) * (b.y - a.y) - (point.y - a.y) * (b.x - a.x) > 0.0
}

/// Turning angle between two directed 2D segments, in `[0, π)`.
///
/// For segments sharing a middle vertex, `(a, b)` and `(b, c)`, this is the
/// angle subtended by the circular arc that rounds the corner at `b`:
/// zero for a straight continuation, π/2 for a right-angle turn.
#[must_use]
pub fn angle_between(l1: &Line2, l2: &Line2) -> f64 {
    let [a, b] = l1;
    let [c, d] = l2;
    let alpha0 = (a.y - b.y).atan2(a.x - b.x);
    let alpha1 = (d.y - c.y).atan2(d.x - c.x);
    (alpha1 - alpha0).rem_euclid(PI)
}

/// Linear interpolation from `a` toward `b` by fraction `t`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new((1.0 - t) * a.x + t * b.x, (1.0 - t) * a.y + t * b.y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn intersection_perpendicular() {
        let l1 = [p(0.0, 0.0), p(2.0, 0.0)];
        let l2 = [p(1.0, -1.0), p(1.0, 1.0)];
        let hit = line_intersection(&l1, &l2).unwrap();
        assert!((hit.x - 1.0).abs() < TOLERANCE);
        assert!(hit.y.abs() < TOLERANCE);
    }

    #[test]
    fn intersection_beyond_segments() {
        // Lines cross at (2, 2), outside both given segments.
        let l1 = [p(0.0, 0.0), p(1.0, 1.0)];
        let l2 = [p(0.0, 4.0), p(1.0, 3.0)];
        let hit = line_intersection(&l1, &l2).unwrap();
        assert!((hit.x - 2.0).abs() < TOLERANCE);
        assert!((hit.y - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn intersection_parallel_returns_none() {
        let l1 = [p(0.0, 0.0), p(1.0, 0.0)];
        let l2 = [p(0.0, 1.0), p(1.0, 1.0)];
        assert!(line_intersection(&l1, &l2).is_none());
    }

    #[test]
    fn right_side_convention() {
        let line = [p(0.0, 0.0), p(0.0, 1.0)];
        assert!(on_right_side(&line, &p(1.0, 0.5)));
        assert!(!on_right_side(&line, &p(-1.0, 0.5)));
        // A point on the line is not on its right side.
        assert!(!on_right_side(&line, &p(0.0, 2.0)));
    }

    #[test]
    fn angle_straight_continuation_is_zero() {
        let l1 = [p(0.0, 0.0), p(1.0, 0.0)];
        let l2 = [p(1.0, 0.0), p(2.0, 0.0)];
        assert!(angle_between(&l1, &l2).abs() < TOLERANCE);
    }

    #[test]
    fn angle_right_turn() {
        let l1 = [p(0.0, 0.0), p(1.0, 0.0)];
        let l2 = [p(1.0, 0.0), p(1.0, 1.0)];
        assert!((angle_between(&l1, &l2) - FRAC_PI_2).abs() < TOLERANCE);
        // Turning the other way gives the same unsigned arc angle.
        let l3 = [p(1.0, 0.0), p(1.0, -1.0)];
        assert!((angle_between(&l1, &l3) - FRAC_PI_2).abs() < TOLERANCE);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 4.0);
        assert_eq!(lerp(&a, &b, 0.0), a);
        assert_eq!(lerp(&a, &b, 1.0), b);
        let mid = lerp(&a, &b, 0.5);
        assert!((mid.x - 1.0).abs() < TOLERANCE);
        assert!((mid.y - 2.0).abs() < TOLERANCE);
    }
}
