use crate::geometry::curve::BezierCurve;
use crate::math::bounding_box::BoundingBox;

/// An ordered sequence of curves whose endpoints are contiguous, forming a
/// composite outline or path.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyBezier {
    curves: Vec<BezierCurve>,
}

impl PolyBezier {
    /// Creates a path from an ordered curve sequence.
    ///
    /// Contiguity (`curves[i].ending_point() == curves[i+1].starting_point()`)
    /// is a structural precondition on the caller, checked in debug builds.
    #[must_use]
    pub fn new(curves: Vec<BezierCurve>) -> Self {
        debug_assert!(
            curves
                .windows(2)
                .all(|w| (w[0].ending_point() - w[1].starting_point()).norm() < 1e-6),
            "poly-Bézier curves must be contiguous"
        );
        Self { curves }
    }

    /// The curves of the path, in order.
    #[must_use]
    pub fn curves(&self) -> &[BezierCurve] {
        &self.curves
    }

    /// Number of curves in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the path contains no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Whether the path's last endpoint meets its first starting point.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.curves.first(), self.curves.last()) {
            (Some(first), Some(last)) => {
                (last.ending_point() - first.starting_point()).norm() < 1e-6
            }
            _ => false,
        }
    }

    /// Union of the member curves' bounding boxes.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.curves
            .iter()
            .fold(BoundingBox::EMPTY, |bbox, c| bbox.union(&c.bounding_box()))
    }

    /// Total arc length of the path.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.curves.iter().map(BezierCurve::length).sum()
    }
}
