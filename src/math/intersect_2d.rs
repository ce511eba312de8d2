use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given infinite lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)`
/// if the lines are not parallel.
#[must_use]
pub fn line_line_intersect(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Intersection point of the infinite lines through `p1 → p2` and `p3 → p4`.
///
/// Returns `None` when the lines are parallel or either segment is
/// zero-length.
#[must_use]
pub fn line_intersection_4pt(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let (t, _) = line_line_intersect(p1, &d1, p3, &d2)?;
    Some(p1 + d1 * t)
}
