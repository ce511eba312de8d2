use crate::error::{GeometryError, Result};
use crate::geometry::curve::{BezierCurve, CubicCurve, LineSegment, QuadraticCurve};
use crate::math::intersect_2d::line_line_intersect;
use crate::math::{perpendicular, signed_angle, Point2, Vector2, TOLERANCE};

/// Rigid constant-distance offset approximation of a curve.
///
/// Anchors move exactly `distance` along the endpoint normals; interior
/// control points are repositioned so the offset keeps the original's
/// endpoint tangents. The construction is defined for any curve with
/// nonzero endpoint tangents, but its accuracy degrades with the angle the
/// curve turns through, so callers reduce to simple pieces first. Pieces
/// straddling a cusp fail with an error instead.
#[derive(Debug)]
pub struct Scale {
    curve: BezierCurve,
    distance: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(curve: BezierCurve, distance: f64) -> Self {
        Self { curve, distance }
    }

    /// Executes the scale, returning a curve of the same order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] when an endpoint tangent is
    /// degenerate (a cusp the reducer could not isolate), and
    /// [`GeometryError::Degenerate`] when the offset origin cannot be
    /// constructed.
    pub fn execute(&self) -> Result<BezierCurve> {
        let d = self.distance;
        match &self.curve {
            BezierCurve::Line(l) => {
                let n = l.normal()?;
                Ok(LineSegment::new(l.p0 + n * d, l.p1 + n * d).into())
            }
            _ if self.curve.is_linear() => translate_along_chord_normal(&self.curve, d),
            BezierCurve::Quadratic(q) => {
                let n0 = q.normal(0.0)?;
                let n1 = q.normal(1.0)?;
                let o = offset_origin(&q.p0, &n0, &q.p2, &n1)?;
                let np0 = q.p0 + n0 * d;
                let np2 = q.p2 + n1 * d;
                let np1 = tangent_ray_intersect(&np0, &q.derivative(0.0), &o, &q.p1)?;
                Ok(QuadraticCurve::new(np0, np1, np2).into())
            }
            BezierCurve::Cubic(c) => {
                let n0 = c.normal(0.0)?;
                let n1 = c.normal(1.0)?;
                let o = offset_origin(&c.p0, &n0, &c.p3, &n1)?;
                let np0 = c.p0 + n0 * d;
                let np3 = c.p3 + n1 * d;
                let np1 = tangent_ray_intersect(&np0, &c.derivative(0.0), &o, &c.p1)?;
                let np2 = tangent_ray_intersect(&np3, &c.derivative(1.0), &o, &c.p2)?;
                Ok(CubicCurve::new(np0, np1, np2, np3).into())
            }
        }
    }
}

/// Graduated offset of a cubic, driven by a distance function over its
/// parameter. Endpoints move by `f(0)`/`f(1)` along the endpoint normals;
/// interior control points move along the ray from the offset origin, with
/// the sign corrected for the curve's turning direction.
///
/// Linear cubics fall back to a cubic through the two pointwise-offset
/// endpoints.
///
/// # Errors
///
/// Same failure modes as [`Scale::execute`].
pub(crate) fn scale_graduated<F>(cubic: &CubicCurve, f: F) -> Result<CubicCurve>
where
    F: Fn(f64) -> f64,
{
    let as_curve = BezierCurve::Cubic(*cubic);
    if as_curve.is_linear() {
        let chord = cubic.p3 - cubic.p0;
        let len = chord.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let n = perpendicular(&chord) / len;
        return Ok(CubicCurve::from_line(
            cubic.p0 + n * f(0.0),
            cubic.p3 + n * f(1.0),
        ));
    }

    let n0 = cubic.normal(0.0)?;
    let n1 = cubic.normal(1.0)?;
    let o = offset_origin(&cubic.p0, &n0, &cubic.p3, &n1)?;
    let clockwise = signed_angle(&cubic.p0, &cubic.p3, &cubic.p1) > 0.0;

    let np0 = cubic.p0 + n0 * f(0.0);
    let np3 = cubic.p3 + n1 * f(1.0);

    let mut interior = [cubic.p1, cubic.p2];
    for (i, p) in interior.iter_mut().enumerate() {
        let ov = *p - o;
        let m = ov.norm();
        if m < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "control point coincides with the offset origin".into(),
            )
            .into());
        }
        #[allow(clippy::cast_precision_loss)]
        let mut rc = f((i as f64 + 1.0) / 3.0);
        if !clockwise {
            rc = -rc;
        }
        *p += ov / m * rc;
    }
    Ok(CubicCurve::new(np0, interior[0], interior[1], np3))
}

/// Translates every control point along the chord normal; the exact offset
/// for curves whose control points are collinear.
fn translate_along_chord_normal(curve: &BezierCurve, d: f64) -> Result<BezierCurve> {
    let chord = curve.ending_point() - curve.starting_point();
    let len = chord.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    let n = perpendicular(&chord) / len;
    let points: Vec<Point2> = curve.points().iter().map(|p| p + n * d).collect();
    BezierCurve::from_points(&points)
}

/// Intersection of the two endpoint-normal rays: the point all offsets of
/// the curve locally revolve around.
fn offset_origin(
    start: &Point2,
    n0: &Vector2,
    end: &Point2,
    n1: &Vector2,
) -> Result<Point2> {
    let (t, _) = line_line_intersect(start, n0, end, n1).ok_or_else(|| {
        GeometryError::Degenerate("parallel endpoint normals admit no offset origin".into())
    })?;
    Ok(start + n0 * t)
}

/// New interior control point: where the tangent line through the moved
/// anchor crosses the ray from the offset origin through the original
/// control point.
fn tangent_ray_intersect(
    anchor: &Point2,
    tangent: &Vector2,
    origin: &Point2,
    through: &Point2,
) -> Result<Point2> {
    let ray = through - origin;
    let (t, _) = line_line_intersect(anchor, tangent, origin, &ray).ok_or_else(|| {
        GeometryError::Degenerate("tangent parallel to the offset-origin ray".into())
    })?;
    Ok(anchor + tangent * t)
}
