use crate::geometry::curve::{BezierCurve, CubicCurve};
use crate::math::bounding_box::BoundingBox;
use crate::math::{Point2, TOLERANCE};

/// A stroke cap: a cubic joining the two offset copies at one curve end.
///
/// A cap whose endpoints coincide is `virtual`: it stays in the structure
/// for uniformity but is skipped by bounding-box and rendering consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cap {
    pub curve: CubicCurve,
    pub virtual_cap: bool,
}

impl Cap {
    /// Builds a cap as a cubic degenerated from the line `from → to`,
    /// flagged virtual when the two ends coincide.
    #[must_use]
    pub fn new(from: Point2, to: Point2) -> Self {
        Self {
            curve: CubicCurve::from_line(from, to),
            virtual_cap: (to - from).norm() < TOLERANCE,
        }
    }
}

/// One stroke unit: a forward offset curve, the matching back offset curve
/// (oriented tail-to-head so the unit traces a closed loop), and two caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub startcap: Cap,
    pub endcap: Cap,
    pub forward: BezierCurve,
    pub back: BezierCurve,
}

impl Shape {
    /// Builds the closed loop `startcap → forward → endcap → back` from a
    /// forward/back offset pair.
    #[must_use]
    pub fn new(forward: BezierCurve, back: BezierCurve) -> Self {
        Self {
            startcap: Cap::new(back.ending_point(), forward.starting_point()),
            endcap: Cap::new(forward.ending_point(), back.starting_point()),
            forward,
            back,
        }
    }

    /// Union of the constituent bounding boxes, skipping virtual caps.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = self.forward.bounding_box().union(&self.back.bounding_box());
        if !self.startcap.virtual_cap {
            bbox = bbox.union(&self.startcap.curve.bounding_box());
        }
        if !self.endcap.virtual_cap {
            bbox = bbox.union(&self.endcap.curve.bounding_box());
        }
        bbox
    }
}
