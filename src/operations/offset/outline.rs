use crate::error::{OperationError, Result};
use crate::geometry::curve::{BezierCurve, CubicCurve};
use crate::geometry::poly_bezier::PolyBezier;
use crate::geometry::shape::Shape;
use crate::math::TOLERANCE;
use crate::operations::offset::scale::scale_graduated;
use crate::operations::offset::Scale;
use crate::operations::reduce::Reduce;

#[derive(Debug, Clone, Copy)]
enum StrokeDistances {
    /// Constant `d1` along the normal, `d2` along the anti-normal.
    Rigid { d1: f64, d2: f64 },
    /// Linear in arc length: `d1 → d3` along the normal, `d2 → d4` along
    /// the anti-normal.
    Graduated { d1: f64, d2: f64, d3: f64, d4: f64 },
}

/// Builds the closed stroke boundary of a curve: the forward offset, the
/// reversed back offset, and two cubic caps joining them.
///
/// The resulting path always runs `startcap, forward…, endcap, back…`,
/// clockwise from the anti-normal start corner; a line segment yields
/// exactly four curves.
#[derive(Debug)]
pub struct Outline {
    curve: BezierCurve,
    distances: StrokeDistances,
}

impl Outline {
    /// Symmetric stroke of half-width `distance`.
    #[must_use]
    pub fn new(curve: BezierCurve, distance: f64) -> Self {
        Self {
            curve,
            distances: StrokeDistances::Rigid {
                d1: distance,
                d2: distance,
            },
        }
    }

    /// Asymmetric stroke: `d1` along the normal side, `d2` along the
    /// anti-normal side.
    #[must_use]
    pub fn asymmetric(curve: BezierCurve, d1: f64, d2: f64) -> Self {
        Self {
            curve,
            distances: StrokeDistances::Rigid { d1, d2 },
        }
    }

    /// Graduated stroke: distances vary linearly in arc length from
    /// `d1`/`d2` at the start to `d3`/`d4` at the end (normal/anti-normal
    /// respectively). Pieces are degree-raised to cubics before offsetting.
    #[must_use]
    pub fn graduated(curve: BezierCurve, d1: f64, d2: f64, d3: f64, d4: f64) -> Self {
        Self {
            curve,
            distances: StrokeDistances::Graduated { d1, d2, d3, d4 },
        }
    }

    /// Executes the outline construction.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for a zero-length curve,
    /// or a geometry error when a piece cannot be offset.
    pub fn execute(&self) -> Result<PolyBezier> {
        let reduced = Reduce::new(self.curve).execute();
        let lengths: Vec<f64> = reduced.iter().map(|p| p.curve.length()).collect();
        let total: f64 = lengths.iter().sum();
        if total < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "cannot outline a zero-length curve".into(),
            )
            .into());
        }

        let mut fcurves: Vec<BezierCurve> = Vec::with_capacity(reduced.len());
        let mut bcurves: Vec<BezierCurve> = Vec::with_capacity(reduced.len());

        match self.distances {
            StrokeDistances::Rigid { d1, d2 } => {
                for piece in &reduced {
                    fcurves.push(Scale::new(piece.curve, d1).execute()?);
                    bcurves.push(Scale::new(piece.curve, -d2).execute()?);
                }
            }
            StrokeDistances::Graduated { d1, d2, d3, d4 } => {
                let mut consumed = 0.0;
                for (piece, len) in reduced.iter().zip(lengths) {
                    let cubic = piece.curve.to_cubic();
                    let f1 = consumed / total;
                    let f2 = (consumed + len) / total;
                    let forward = scale_graduated(&cubic, |t| {
                        let f = f1 + t * (f2 - f1);
                        d1 + f * (d3 - d1)
                    })?;
                    let back = scale_graduated(&cubic, |t| {
                        let f = f1 + t * (f2 - f1);
                        -(d2 + f * (d4 - d2))
                    })?;
                    fcurves.push(forward.into());
                    bcurves.push(back.into());
                    consumed += len;
                }
            }
        }

        // The back run traces tail-to-head: reverse each curve, then the order.
        let bcurves: Vec<BezierCurve> = bcurves.iter().rev().map(BezierCurve::reversed).collect();

        let fs = fcurves[0].starting_point();
        let fe = fcurves[fcurves.len() - 1].ending_point();
        let bs = bcurves[bcurves.len() - 1].ending_point();
        let be = bcurves[0].starting_point();

        let startcap: BezierCurve = CubicCurve::from_line(bs, fs).into();
        let endcap: BezierCurve = CubicCurve::from_line(fe, be).into();

        let mut curves = Vec::with_capacity(fcurves.len() + bcurves.len() + 2);
        curves.push(startcap);
        curves.extend(fcurves);
        curves.push(endcap);
        curves.extend(bcurves);
        Ok(PolyBezier::new(curves))
    }
}

/// Splits an outline into per-piece [`Shape`] stroke units, pairing each
/// forward curve with its mirror back curve. Caps at interior junctions
/// are flagged virtual.
#[derive(Debug)]
pub struct OutlineShapes {
    curve: BezierCurve,
    d1: f64,
    d2: f64,
}

impl OutlineShapes {
    /// Creates a new `OutlineShapes` operation with symmetric distance.
    #[must_use]
    pub fn new(curve: BezierCurve, distance: f64) -> Self {
        Self {
            curve,
            d1: distance,
            d2: distance,
        }
    }

    /// Creates a new `OutlineShapes` operation with per-side distances.
    #[must_use]
    pub fn asymmetric(curve: BezierCurve, d1: f64, d2: f64) -> Self {
        Self { curve, d1, d2 }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Outline::execute`].
    pub fn execute(&self) -> Result<Vec<Shape>> {
        let outline = Outline::asymmetric(self.curve, self.d1, self.d2).execute()?;
        let curves = outline.curves();
        let len = curves.len();

        let mut shapes = Vec::with_capacity(len / 2 - 1);
        for i in 1..len / 2 {
            let mut shape = Shape::new(curves[i], curves[len - i]);
            shape.startcap.virtual_cap |= i > 1;
            shape.endcap.virtual_cap |= i < len / 2 - 1;
            shapes.push(shape);
        }
        Ok(shapes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BezgeoError;
    use crate::geometry::curve::test_helpers::control_points_equal;
    use crate::geometry::curve::{CubicCurve, LineSegment, QuadraticCurve};
    use crate::math::Point2;
    use crate::operations::offset::curve_offset::offset_point;

    const TOL: f64 = 1e-6;

    fn line_for_outlining() -> BezierCurve {
        LineSegment::new(Point2::new(-10.0, -5.0), Point2::new(20.0, 10.0)).into()
    }

    fn expect_line(actual: &BezierCurve, p0: Point2, p1: Point2) {
        let expected: BezierCurve = CubicCurve::from_line(p0, p1).into();
        let raised = actual.to_cubic().into();
        assert!(
            control_points_equal(&raised, &expected, TOL),
            "expected segment {p0:?} -> {p1:?}, got {actual:?}"
        );
    }

    #[test]
    fn line_outline_is_a_rectangle() {
        let line = line_for_outlining();
        let outline = Outline::new(line, 1.0).execute().unwrap();
        assert_eq!(outline.len(), 4);

        let n = line.normal(0.0).unwrap();
        let o0 = line.starting_point() + n;
        let o1 = line.ending_point() + n;
        let o2 = line.ending_point() - n;
        let o3 = line.starting_point() - n;

        let curves = outline.curves();
        expect_line(&curves[0], o3, o0);
        expect_line(&curves[1], o0, o1);
        expect_line(&curves[2], o1, o2);
        expect_line(&curves[3], o2, o3);
        assert!(outline.is_closed());
    }

    #[test]
    fn asymmetric_line_outline() {
        let line = line_for_outlining();
        let outline = Outline::asymmetric(line, 1.0, 2.0).execute().unwrap();
        assert_eq!(outline.len(), 4);

        let n = line.normal(0.0).unwrap();
        let o0 = line.starting_point() + n;
        let o1 = line.ending_point() + n;
        let o2 = line.ending_point() - n * 2.0;
        let o3 = line.starting_point() - n * 2.0;

        let curves = outline.curves();
        expect_line(&curves[0], o3, o0);
        expect_line(&curves[1], o0, o1);
        expect_line(&curves[2], o1, o2);
        expect_line(&curves[3], o2, o3);
    }

    #[test]
    fn curved_outline_closes() {
        let c: BezierCurve = CubicCurve::new(
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(4.0, 1.0),
        )
        .into();
        let outline = Outline::new(c, 0.5).execute().unwrap();
        assert!(outline.len() >= 4);
        assert!(outline.is_closed());
        for w in outline.curves().windows(2) {
            assert!((w[0].ending_point() - w[1].starting_point()).norm() < TOL);
        }
    }

    #[test]
    fn graduated_outline_tracks_pointwise_offsets() {
        let c: BezierCurve = CubicCurve::new(
            Point2::new(-4.0, 0.0),
            Point2::new(-2.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(4.0, 0.0),
        )
        .into();
        let (d1, d2, d3, d4) = (0.5, 0.5, 1.5, 1.5);
        let outline = Outline::graduated(c, d1, d2, d3, d4).execute().unwrap();
        assert!(outline.is_closed());

        let curves = outline.curves();
        let forward_start = curves[1].starting_point();
        assert!((forward_start - offset_point(&c, 0.0, d1).unwrap()).norm() < TOL);

        let endcap_index = curves.len() / 2;
        let forward_end = curves[endcap_index - 1].ending_point();
        assert!((forward_end - offset_point(&c, 1.0, d3).unwrap()).norm() < TOL);

        let back_end = curves[curves.len() - 1].ending_point();
        assert!((back_end - offset_point(&c, 0.0, -d2).unwrap()).norm() < TOL);
    }

    #[test]
    fn graduated_outline_of_quadratic_raises_to_cubic() {
        let q: BezierCurve = QuadraticCurve::new(
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 1.0),
        )
        .into();
        let outline = Outline::graduated(q, 0.2, 0.2, 0.6, 0.6).execute().unwrap();
        assert!(outline.is_closed());
        // Every stroke edge of a graduated outline is cubic.
        for curve in outline.curves() {
            assert_eq!(curve.order(), 3);
        }
    }

    #[test]
    fn zero_length_curve_cannot_be_outlined() {
        let p = Point2::new(1.0, 1.0);
        let c: BezierCurve = CubicCurve::new(p, p, p, p).into();
        for outline in [Outline::new(c, 1.0), Outline::graduated(c, 1.0, 1.0, 2.0, 2.0)] {
            let err = outline.execute().unwrap_err();
            assert!(matches!(
                err,
                BezgeoError::Operation(OperationError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn outline_is_deterministic() {
        let c: BezierCurve = CubicCurve::new(
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(4.0, 1.0),
        )
        .into();
        let a = Outline::new(c, 0.5).execute().unwrap();
        let b = Outline::new(c, 0.5).execute().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn outline_shapes_pair_forward_and_back() {
        let c: BezierCurve = CubicCurve::new(
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(4.0, 1.0),
        )
        .into();
        let outline = Outline::new(c, 0.5).execute().unwrap();
        let shapes = OutlineShapes::new(c, 0.5).execute().unwrap();
        assert_eq!(shapes.len(), outline.len() / 2 - 1);

        for (i, shape) in shapes.iter().enumerate() {
            // Each unit is a closed loop.
            assert!(
                (shape.startcap.curve.p3 - shape.forward.starting_point()).norm() < TOL
            );
            assert!((shape.endcap.curve.p0 - shape.forward.ending_point()).norm() < TOL);
            // Interior junction caps are virtual.
            assert_eq!(shape.startcap.virtual_cap, i > 0);
            assert_eq!(shape.endcap.virtual_cap, i < shapes.len() - 1);
        }
    }
}
