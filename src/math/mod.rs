pub mod bounding_box;
pub mod intersect_2d;
pub mod roots;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the counter-clockwise perpendicular of `v`, i.e. `(-v.y, v.x)`.
#[must_use]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Linear interpolation between two points: `a + t * (b - a)`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Signed angle at `o` between the rays `o → a` and `o → b`, in radians.
///
/// Positive when `b` lies counter-clockwise of `a` as seen from `o`.
#[must_use]
pub fn signed_angle(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    let u = a - o;
    let v = b - o;
    let cross = u.x * v.y - u.y * v.x;
    let dot = u.x * v.x + u.y * v.y;
    cross.atan2(dot)
}
