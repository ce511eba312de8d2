use crate::error::{GeometryError, Result};
use crate::geometry::curve::{BezierCurve, Interval};
use crate::math::{Point2, TOLERANCE};

/// A circular-arc approximation of a curve segment.
///
/// Carries the parameter [`Interval`] of the parent curve it stands in for.
/// Arcs are an acceleration aid for expensive geometric queries; they play
/// no role in offset correctness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Center of the approximating circle.
    pub center: Point2,
    /// Radius of the approximating circle.
    pub radius: f64,
    /// Angle of the segment start, in radians.
    pub start_angle: f64,
    /// Angle of the segment end, in radians.
    pub end_angle: f64,
    /// Parameter range of the parent curve this arc approximates.
    pub interval: Interval,
}

impl Arc {
    /// Fits an arc to `curve` over `interval` through the segment's two
    /// endpoints and parameter midpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when the three samples are
    /// collinear and no finite circle exists.
    pub fn approximate(curve: &BezierCurve, interval: Interval) -> Result<Self> {
        let a = curve.compute(interval.start);
        let b = curve.compute(interval.lerp(0.5));
        let c = curve.compute(interval.end);

        // Circumcenter of the three samples.
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d.abs() < TOLERANCE {
            return Err(
                GeometryError::Degenerate("collinear samples admit no circle".into()).into(),
            );
        }
        let a2 = a.coords.norm_squared();
        let b2 = b.coords.norm_squared();
        let c2 = c.coords.norm_squared();
        let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
        let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
        let center = Point2::new(ux, uy);

        Ok(Self {
            center,
            radius: (a - center).norm(),
            start_angle: (a.y - center.y).atan2(a.x - center.x),
            end_angle: (c.y - center.y).atan2(c.x - center.x),
            interval,
        })
    }

    /// Point on the circle at the given angle.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}
