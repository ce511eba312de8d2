use crate::error::{GeometryError, Result};
use crate::math::bounding_box::BoundingBox;
use crate::math::{lerp, perpendicular, Point2, Vector2, TOLERANCE};

/// A straight line segment, the order-1 Bézier curve.
///
/// The parametric form is `P(t) = p0 + t * (p1 - p0)` for `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p0: Point2,
    pub p1: Point2,
}

impl LineSegment {
    /// Creates a new line segment between two points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2) -> Self {
        Self { p0, p1 }
    }

    /// Evaluates the segment at parameter `t`.
    #[must_use]
    pub fn compute(&self, t: f64) -> Point2 {
        lerp(&self.p0, &self.p1, t)
    }

    /// First-derivative vector; constant along the segment.
    #[must_use]
    pub fn derivative(&self) -> Vector2 {
        self.p1 - self.p0
    }

    /// Unit normal; constant along the segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero-length segment.
    pub fn normal(&self) -> Result<Vector2> {
        let d = self.derivative();
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(perpendicular(&d) / len)
    }

    /// Exact segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).norm()
    }

    /// Returns the sub-segment over local parameters `[t1, t2]`.
    #[must_use]
    pub fn split(&self, t1: f64, t2: f64) -> Self {
        Self::new(self.compute(t1), self.compute(t2))
    }

    /// Returns the segment traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p0)
    }

    /// Bounding box from the two endpoints.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::EMPTY;
        bbox.expand(&self.p0);
        bbox.expand(&self.p1);
        bbox
    }
}
