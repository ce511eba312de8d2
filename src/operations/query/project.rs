use crate::geometry::curve::{BezierCurve, LineSegment};
use crate::math::{Point2, TOLERANCE};

/// Number of coarse samples bracketing the refinement interval.
const SAMPLES: u16 = 128;

/// Ternary-section refinement rounds inside the bracket. Fixed, so the
/// query is deterministic; accuracy is bounded by the count, not by a
/// convergence tolerance.
const REFINEMENT_ROUNDS: u16 = 48;

/// Result of a closest-point query.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionResult {
    /// The closest point on the curve.
    pub point: Point2,
    /// The parameter value at the closest point.
    pub t: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the closest point on a curve to a given point.
///
/// Line segments are projected in closed form; quadratics and cubics use
/// coarse sampling followed by a fixed number of ternary-section rounds.
/// Total: every input yields a point on the curve.
#[derive(Debug)]
pub struct Project {
    curve: BezierCurve,
    point: Point2,
}

impl Project {
    /// Creates a new `Project` query.
    #[must_use]
    pub fn new(curve: BezierCurve, point: Point2) -> Self {
        Self { curve, point }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> ProjectionResult {
        match &self.curve {
            BezierCurve::Line(l) => self.project_line(l),
            _ => self.project_sampled(),
        }
    }

    /// Closed-form projection onto a bounded segment.
    fn project_line(&self, line: &LineSegment) -> ProjectionResult {
        let dir = line.derivative();
        let len_sq = dir.norm_squared();
        if len_sq < TOLERANCE {
            // Zero-length chord: the segment is a single point.
            return self.result_at(0.0);
        }
        let t = ((self.point - line.p0).dot(&dir) / len_sq).clamp(0.0, 1.0);
        self.result_at(t)
    }

    /// Coarse sampling plus fixed-round ternary refinement.
    fn project_sampled(&self) -> ProjectionResult {
        let mut best_t = 0.0;
        let mut best_dist = f64::INFINITY;
        for i in 0..=SAMPLES {
            let t = f64::from(i) / f64::from(SAMPLES);
            let d = (self.point - self.curve.compute(t)).norm();
            if d < best_dist {
                best_dist = d;
                best_t = t;
            }
        }

        let dt = 1.0 / f64::from(SAMPLES);
        let mut lo = (best_t - dt).max(0.0);
        let mut hi = (best_t + dt).min(1.0);
        for _ in 0..REFINEMENT_ROUNDS {
            let mid1 = lo + (hi - lo) / 3.0;
            let mid2 = hi - (hi - lo) / 3.0;
            let d1 = (self.point - self.curve.compute(mid1)).norm();
            let d2 = (self.point - self.curve.compute(mid2)).norm();
            if d1 < d2 {
                hi = mid2;
            } else {
                lo = mid1;
            }
        }

        self.result_at(f64::midpoint(lo, hi))
    }

    fn result_at(&self, t: f64) -> ProjectionResult {
        let point = self.curve.compute(t);
        ProjectionResult {
            point,
            t,
            distance: (self.point - point).norm(),
        }
    }
}
