use super::{Point2, TOLERANCE};

/// Signed area of a closed 2D polygon (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
#[must_use]
pub fn polygon_signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// 2D convex hull by Andrew's monotone chain.
///
/// Returns indices into `points`, ordered counter-clockwise starting from
/// the leftmost-bottom point. Collinear points on the hull boundary are
/// dropped. Input sizes here are tiny (the cube body has 8 corners) so the
/// sort dominates; what matters is the consistent winding, which the
/// silhouette path inherits.
#[must_use]
pub fn convex_hull(points: &[Point2]) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        points[a]
            .x
            .total_cmp(&points[b].x)
            .then(points[a].y.total_cmp(&points[b].y))
    });

    let cross = |o: usize, a: usize, b: usize| -> f64 {
        (points[a].x - points[o].x) * (points[b].y - points[o].y)
            - (points[a].y - points[o].y) * (points[b].x - points[o].x)
    };

    let mut lower: Vec<usize> = Vec::with_capacity(n);
    for &idx in &order {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2], lower[lower.len() - 1], idx) <= TOLERANCE
        {
            lower.pop();
        }
        lower.push(idx);
    }

    let mut upper: Vec<usize> = Vec::with_capacity(n);
    for &idx in order.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2], upper[upper.len() - 1], idx) <= TOLERANCE
        {
            upper.pop();
        }
        upper.push(idx);
    }

    // Each chain's last point is the other chain's first.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
