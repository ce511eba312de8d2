use crate::error::{GeometryError, Result};
use crate::math::bounding_box::BoundingBox;
use crate::math::{lerp, perpendicular, roots, Point2, Vector2, TOLERANCE};

use super::cubic::CubicCurve;

/// A quadratic Bézier curve (order 2, three control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCurve {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
}

impl QuadraticCurve {
    /// Creates a new quadratic curve from its control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluates the curve at parameter `t` (Bernstein form).
    #[must_use]
    pub fn compute(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        let a = mt * mt;
        let b = 2.0 * mt * t;
        let c = t * t;
        Point2::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y,
        )
    }

    /// First-derivative vector at parameter `t`.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector2 {
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        (d0 * (1.0 - t) + d1 * t) * 2.0
    }

    /// Second-derivative vector; constant along the curve.
    #[must_use]
    pub fn second_derivative(&self) -> Vector2 {
        (self.p2 - self.p1 * 2.0 + self.p0.coords) * 2.0
    }

    /// Unit normal at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when the tangent vanishes.
    pub fn normal(&self, t: f64) -> Result<Vector2> {
        let d = self.derivative(t);
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(perpendicular(&d) / len)
    }

    /// Interior parameters in `(0, 1)` where a derivative component vanishes.
    #[must_use]
    pub fn extrema(&self) -> Vec<f64> {
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let mut ts = Vec::new();
        if let Some(t) = roots::linear_root(d0.x, d1.x) {
            ts.push(t);
        }
        if let Some(t) = roots::linear_root(d0.y, d1.y) {
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
        let r = lerp(&q0, &q1, t);
        (Self::new(self.p0, q0, r), Self::new(r, q1, self.p2))
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

    /// Degree elevation to an equivalent cubic curve.
    ///
    /// Required before graduated offsetting, which only operates on cubics.
    #[must_use]
    pub fn raise(&self) -> CubicCurve {
        let c1 = Point2::from((self.p0.coords + self.p1.coords * 2.0) / 3.0);
        let c2 = Point2::from((self.p1.coords * 2.0 + self.p2.coords) / 3.0);
        CubicCurve::new(self.p0, c1, c2, self.p2)
    }

    /// Returns the curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1, self.p0)
    }

    /// Bounding box from endpoints and interior extrema.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::EMPTY;
        bbox.expand(&self.p0);
        bbox.expand(&self.p2);
        for t in self.extrema() {
            bbox.expand(&self.compute(t));
        }
        bbox
    }
}
