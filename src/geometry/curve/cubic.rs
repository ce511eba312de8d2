use crate::error::{GeometryError, Result};
use crate::math::bounding_box::BoundingBox;
use crate::math::{lerp, perpendicular, roots, Point2, Vector2, TOLERANCE};

use super::line::LineSegment;

/// A cubic Bézier curve (order 3, four control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl CubicCurve {
    /// Creates a new cubic curve from its control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// A cubic degenerated from a straight line, with interior control
    /// points at the third points of the chord.
    ///
    /// Used for stroke caps and for degree-raising line segments.
    #[must_use]
    pub fn from_line(p0: Point2, p1: Point2) -> Self {
        let c1 = lerp(&p0, &p1, 1.0 / 3.0);
        let c2 = lerp(&p0, &p1, 2.0 / 3.0);
        Self::new(p0, c1, c2, p1)
    }

    /// Creates a cubic from a [`LineSegment`].
    #[must_use]
    pub fn from_line_segment(line: &LineSegment) -> Self {
        Self::from_line(line.p0, line.p1)
    }

    /// Evaluates the curve at parameter `t` (Bernstein form).
    #[must_use]
    pub fn compute(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point2::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x + d * self.p3.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y + d * self.p3.y,
        )
    }

    /// First-derivative vector at parameter `t`.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector2 {
        let d0 = (self.p1 - self.p0) * 3.0;
        let d1 = (self.p2 - self.p1) * 3.0;
        let d2 = (self.p3 - self.p2) * 3.0;
        let mt = 1.0 - t;
        d0 * (mt * mt) + d1 * (2.0 * mt * t) + d2 * (t * t)
    }

    /// Second-derivative vector at parameter `t`.
    #[must_use]
    pub fn second_derivative(&self, t: f64) -> Vector2 {
        let dd0 = (self.p2 - self.p1 * 2.0 + self.p0.coords) * 6.0;
        let dd1 = (self.p3 - self.p2 * 2.0 + self.p1.coords) * 6.0;
        dd0 * (1.0 - t) + dd1 * t
    }

    /// Unit normal at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the tangent vanishes
    /// (a cusp).
    pub fn normal(&self, t: f64) -> Result<Vector2> {
        let d = self.derivative(t);
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(perpendicular(&d) / len)
    }

    /// Interior parameters in `(0, 1)` where a component of the first or
    /// second derivative vanishes; sorted and deduplicated.
    #[must_use]
    pub fn extrema(&self) -> Vec<f64> {
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;

        let mut ts = roots::quadratic_roots(d0.x, d1.x, d2.x);
        ts.extend(roots::quadratic_roots(d0.y, d1.y, d2.y));

        // Second-derivative roots catch inflections the first pass misses.
        let dd0 = d1 - d0;
        let dd1 = d2 - d1;
        if let Some(t) = roots::linear_root(dd0.x, dd1.x) {
            ts.push(t);
        }
        if let Some(t) = roots::linear_root(dd0.y, dd1.y) {
            ts.push(t);
        }

        ts.sort_by(f64::total_cmp);
        ts.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);
        ts
    }

    /// Splits the curve at `t` by de Casteljau, returning the two halves.
    #[must_use]
    pub fn split_at(&self, t: f64) -> (Self, Self) {
        let q0 = lerp(&self.p0, &self.p1, t);
        let q1 = lerp(&self.p1, &self.p2, t);
        let q2 = lerp(&self.p2, &self.p3, t);
        let r0 = lerp(&q0, &q1, t);
        let r1 = lerp(&q1, &q2, t);
        let s = lerp(&r0, &r1, t);
        (
            Self::new(self.p0, q0, r0, s),
            Self::new(s, r1, q2, self.p3),
        )
    }

    /// Returns the sub-curve over local parameters `[t1, t2]`.
    #[must_use]
    pub fn split(&self, t1: f64, t2: f64) -> Self {
        if t1 < TOLERANCE {
            return self.split_at(t2).0;
        }
        let right = self.split_at(t1).1;
        if t2 > 1.0 - TOLERANCE {
            return right;
        }
        right.split_at((t2 - t1) / (1.0 - t1)).0
    }

    /// Returns the curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p3, self.p2, self.p1, self.p0)
    }

    /// Bounding box from endpoints and interior extrema.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::EMPTY;
        bbox.expand(&self.p0);
        bbox.expand(&self.p3);
        for t in self.extrema() {
            bbox.expand(&self.compute(t));
        }
        bbox
    }
}
