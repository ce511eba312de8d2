use crate::error::Result;
use crate::geometry::curve::BezierCurve;
use crate::math::Point2;
use crate::operations::offset::Scale;
use crate::operations::reduce::Reduce;

/// Piecewise constant-distance offset of an arbitrary curve.
///
/// Lines and linear curves offset as a single translated curve; anything
/// else is reduced to simple pieces which are scaled one by one. The
/// pieces share endpoints, so the offset sequence is contiguous.
#[derive(Debug)]
pub struct CurveOffset {
    curve: BezierCurve,
    distance: f64,
}

impl CurveOffset {
    /// Creates a new `CurveOffset` operation.
    #[must_use]
    pub fn new(curve: BezierCurve, distance: f64) -> Self {
        Self { curve, distance }
    }

    /// Executes the offset, returning the ordered offset pieces.
    ///
    /// # Errors
    ///
    /// Returns an error when a piece cannot be scaled (degenerate tangent
    /// at an unresolvable cusp, or a zero-length curve).
    pub fn execute(&self) -> Result<Vec<BezierCurve>> {
        if matches!(self.curve, BezierCurve::Line(_)) || self.curve.is_linear() {
            return Ok(vec![Scale::new(self.curve, self.distance).execute()?]);
        }
        Reduce::new(self.curve)
            .execute()
            .into_iter()
            .map(|piece| Scale::new(piece.curve, self.distance).execute())
            .collect()
    }
}

/// Exact pointwise offset: `compute(t) + distance · normal(t)`.
///
/// Independent of the reducer and scaler; the building block for
/// graduated (variable-distance) offsets.
///
/// # Errors
///
/// Returns [`crate::error::GeometryError::ZeroVector`] when the tangent at
/// `t` vanishes.
pub fn offset_point(curve: &BezierCurve, t: f64, distance: f64) -> Result<Point2> {
    Ok(curve.compute(t) + curve.normal(t)? * distance)
}
