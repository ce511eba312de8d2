mod cubic;
mod line;
mod quadratic;

pub use cubic::CubicCurve;
pub use line::LineSegment;
pub use quadratic::QuadraticCurve;

use std::f64::consts::FRAC_PI_3;

use crate::error::{GeometryError, Result};
use crate::math::bounding_box::BoundingBox;
use crate::math::{perpendicular, signed_angle, Point2, Vector2, TOLERANCE};

/// The portion of a parent curve's parameter domain a derived curve covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Start of the parameter range.
    pub start: f64,
    /// End of the parameter range.
    pub end: f64,
}

impl Interval {
    /// Creates a new interval.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Maps a local parameter `t ∈ [0, 1]` into this interval.
    #[must_use]
    pub fn lerp(&self, t: f64) -> f64 {
        self.start + t * (self.end - self.start)
    }

    /// Extent of the interval.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// A planar Bézier curve of order 1, 2 or 3.
///
/// Closed tagged variant over the three concrete curve types; all shared
/// evaluation primitives are forwarded to the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BezierCurve {
    Line(LineSegment),
    Quadratic(QuadraticCurve),
    Cubic(CubicCurve),
}

impl From<LineSegment> for BezierCurve {
    fn from(l: LineSegment) -> Self {
        Self::Line(l)
    }
}

impl From<QuadraticCurve> for BezierCurve {
    fn from(q: QuadraticCurve) -> Self {
        Self::Quadratic(q)
    }
}

impl From<CubicCurve> for BezierCurve {
    fn from(c: CubicCurve) -> Self {
        Self::Cubic(c)
    }
}

impl BezierCurve {
    /// Builds a curve from `order + 1` control points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidControlPoints`] unless 2, 3 or 4
    /// points are given.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        match points {
            [p0, p1] => Ok(LineSegment::new(*p0, *p1).into()),
            [p0, p1, p2] => Ok(QuadraticCurve::new(*p0, *p1, *p2).into()),
            [p0, p1, p2, p3] => Ok(CubicCurve::new(*p0, *p1, *p2, *p3).into()),
            _ => Err(GeometryError::InvalidControlPoints {
                actual: points.len(),
            }
            .into()),
        }
    }

    /// Polynomial degree of the curve: 1, 2 or 3.
    #[must_use]
    pub fn order(&self) -> usize {
        match self {
            Self::Line(_) => 1,
            Self::Quadratic(_) => 2,
            Self::Cubic(_) => 3,
        }
    }

    /// Ordered control points; `order() + 1` entries.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        match self {
            Self::Line(l) => vec![l.p0, l.p1],
            Self::Quadratic(q) => vec![q.p0, q.p1, q.p2],
            Self::Cubic(c) => vec![c.p0, c.p1, c.p2, c.p3],
        }
    }

    /// First control point, `compute(0)`.
    #[must_use]
    pub fn starting_point(&self) -> Point2 {
        match self {
            Self::Line(l) => l.p0,
            Self::Quadratic(q) => q.p0,
            Self::Cubic(c) => c.p0,
        }
    }

    /// Last control point, `compute(1)`.
    #[must_use]
    pub fn ending_point(&self) -> Point2 {
        match self {
            Self::Line(l) => l.p1,
            Self::Quadratic(q) => q.p2,
            Self::Cubic(c) => c.p3,
        }
    }

    /// Evaluates the curve at parameter `t`.
    #[must_use]
    pub fn compute(&self, t: f64) -> Point2 {
        match self {
            Self::Line(l) => l.compute(t),
            Self::Quadratic(q) => q.compute(t),
            Self::Cubic(c) => c.compute(t),
        }
    }

    /// First-derivative vector at parameter `t`.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector2 {
        match self {
            Self::Line(l) => l.derivative(),
            Self::Quadratic(q) => q.derivative(t),
            Self::Cubic(c) => c.derivative(t),
        }
    }

    /// Unit normal at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the tangent vanishes.
    pub fn normal(&self, t: f64) -> Result<Vector2> {
        match self {
            Self::Line(l) => l.normal(),
            Self::Quadratic(q) => q.normal(t),
            Self::Cubic(c) => c.normal(t),
        }
    }

    /// Signed curvature at parameter `t`; zero for line segments.
    #[must_use]
    pub fn curvature(&self, t: f64) -> f64 {
        let (d, dd) = match self {
            Self::Line(_) => return 0.0,
            Self::Quadratic(q) => (q.derivative(t), q.second_derivative()),
            Self::Cubic(c) => (c.derivative(t), c.second_derivative(t)),
        };
        let num = d.x * dd.y - d.y * dd.x;
        let den = d.norm().powi(3);
        if den < TOLERANCE {
            return 0.0;
        }
        num / den
    }

    /// Interior parameters in `(0, 1)` where a derivative component
    /// vanishes (plus second-derivative roots for cubics).
    #[must_use]
    pub fn extrema(&self) -> Vec<f64> {
        match self {
            Self::Line(_) => Vec::new(),
            Self::Quadratic(q) => q.extrema(),
            Self::Cubic(c) => c.extrema(),
        }
    }

    /// Splits the curve at `t`, returning the two halves.
    #[must_use]
    pub fn split_at(&self, t: f64) -> (Self, Self) {
        match self {
            Self::Line(l) => {
                let m = l.compute(t);
                (
                    LineSegment::new(l.p0, m).into(),
                    LineSegment::new(m, l.p1).into(),
                )
            }
            Self::Quadratic(q) => {
                let (a, b) = q.split_at(t);
                (a.into(), b.into())
            }
            Self::Cubic(c) => {
                let (a, b) = c.split_at(t);
                (a.into(), b.into())
            }
        }
    }

    /// Returns the sub-curve over local parameters `[t1, t2]`.
    #[must_use]
    pub fn split(&self, t1: f64, t2: f64) -> Self {
        match self {
            Self::Line(l) => l.split(t1, t2).into(),
            Self::Quadratic(q) => q.split(t1, t2).into(),
            Self::Cubic(c) => c.split(t1, t2).into(),
        }
    }

    /// Returns the curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Line(l) => l.reversed().into(),
            Self::Quadratic(q) => q.reversed().into(),
            Self::Cubic(c) => c.reversed().into(),
        }
    }

    /// Whether all interior control points lie on the chord.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        let points = self.points();
        let chord = self.ending_point() - self.starting_point();
        let len = chord.norm();
        if len < TOLERANCE {
            // Zero-length chord: linear only if every point coincides.
            return points
                .iter()
                .all(|p| (p - self.starting_point()).norm() < TOLERANCE);
        }
        let dir = chord / len;
        points.iter().all(|p| {
            let v = p - self.starting_point();
            (v.x * dir.y - v.y * dir.x).abs() < 1e-9
        })
    }

    /// Whether the curve can be offset as a single rigid piece: no
    /// control-point side flip and endpoint normals within 60° of one
    /// another. False when an endpoint tangent is degenerate.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        if let Self::Cubic(c) = self {
            let a1 = signed_angle(&c.p0, &c.p3, &c.p1);
            let a2 = signed_angle(&c.p0, &c.p3, &c.p2);
            if (a1 > 0.0 && a2 < 0.0) || (a1 < 0.0 && a2 > 0.0) {
                return false;
            }
        }
        if matches!(self, Self::Line(_)) {
            return true;
        }
        let d0 = self.derivative(0.0);
        let d1 = self.derivative(1.0);
        if d0.norm() < TOLERANCE || d1.norm() < TOLERANCE {
            return false;
        }
        let n0 = perpendicular(&d0) / d0.norm();
        let n1 = perpendicular(&d1) / d1.norm();
        let s = (n0.x * n1.x + n0.y * n1.y).clamp(-1.0, 1.0);
        s.acos().abs() < FRAC_PI_3
    }

    /// Arc length, via fixed-resolution Simpson integration of the speed.
    /// Exact for line segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        if let Self::Line(l) = self {
            return l.length();
        }
        let n = 32;
        let h = 1.0 / f64::from(n);
        let speed = |t: f64| self.derivative(t).norm();
        let mut sum = speed(0.0) + speed(1.0);
        for i in 1..n {
            let t = f64::from(i) * h;
            sum += if i % 2 == 1 { 4.0 } else { 2.0 } * speed(t);
        }
        sum * h / 3.0
    }

    /// Bounding box from control-point extrema.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Self::Line(l) => l.bounding_box(),
            Self::Quadratic(q) => q.bounding_box(),
            Self::Cubic(c) => c.bounding_box(),
        }
    }

    /// Degree-raises the curve to an equivalent cubic.
    #[must_use]
    pub fn to_cubic(&self) -> CubicCurve {
        match self {
            Self::Line(l) => CubicCurve::from_line_segment(l),
            Self::Quadratic(q) => q.raise(),
            Self::Cubic(c) => *c,
        }
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn cubic_arch() -> BezierCurve {
        CubicCurve::new(
            Point2::new(-4.0, 0.0),
            Point2::new(-2.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(4.0, 0.0),
        )
        .into()
    }

    #[test]
    fn from_points_dispatches_on_arity() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(BezierCurve::from_points(&pts).unwrap().order(), 1);

        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        ];
        assert_eq!(BezierCurve::from_points(&pts).unwrap().order(), 2);

        assert!(BezierCurve::from_points(&[Point2::new(0.0, 0.0)]).is_err());
        assert!(BezierCurve::from_points(&[Point2::new(0.0, 0.0); 5]).is_err());
    }

    #[test]
    fn simple_arch_is_split_by_apex_angle() {
        // Endpoint normals of the arch differ by 90°, beyond the 60° bound.
        assert!(!cubic_arch().is_simple());
        // Its left half stays within the bound.
        let half = cubic_arch().split(0.0, 0.5);
        assert!(half.is_simple());
    }

    #[test]
    fn side_flip_is_not_simple() {
        // Control points on opposite sides of the chord.
        let c: BezierCurve = CubicCurve::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, -1.0),
            Point2::new(3.0, 0.0),
        )
        .into();
        assert!(!c.is_simple());
    }

    #[test]
    fn linear_detection() {
        let c: BezierCurve =
            CubicCurve::from_line(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)).into();
        assert!(c.is_linear());
        assert!(!cubic_arch().is_linear());
    }

    #[test]
    fn length_of_degenerate_cubic_matches_chord() {
        let c: BezierCurve =
            CubicCurve::from_line(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)).into();
        assert!((c.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn curvature_sign_flips_across_inflection() {
        // S-shaped cubic with an inflection near the middle.
        let c: BezierCurve = CubicCurve::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, -2.0),
            Point2::new(3.0, 0.0),
        )
        .into();
        let k0 = c.curvature(0.1);
        let k1 = c.curvature(0.9);
        assert!(k0 * k1 < 0.0);
    }

    #[test]
    fn interval_lerp_maps_local_to_parent() {
        let i = Interval::new(0.25, 0.75);
        assert!((i.lerp(0.0) - 0.25).abs() < TOL);
        assert!((i.lerp(1.0) - 0.75).abs() < TOL);
        assert!((i.lerp(0.5) - 0.5).abs() < TOL);
        assert!((i.length() - 0.5).abs() < TOL);
    }

    #[test]
    fn split_at_halves_join_at_the_split_point() {
        let c = cubic_arch();
        let (left, right) = c.split_at(0.3);
        let p = c.compute(0.3);
        assert!((left.ending_point() - p).norm() < TOL);
        assert!((right.starting_point() - p).norm() < TOL);
        assert!((left.compute(0.5) - c.compute(0.15)).norm() < TOL);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let c = cubic_arch().reversed();
        assert_eq!(c.starting_point(), Point2::new(4.0, 0.0));
        assert_eq!(c.ending_point(), Point2::new(-4.0, 0.0));
    }
}
