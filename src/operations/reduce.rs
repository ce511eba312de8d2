use crate::geometry::curve::{BezierCurve, Interval};
use crate::math::TOLERANCE;

/// Parameter step for the greedy simplicity scan. The 60° normal bound in
/// `BezierCurve::is_simple` keeps segments of this granularity well inside
/// the rigid-offset approximation's accuracy.
const STEP: f64 = 0.01;

/// A piece of a reduced curve together with the parameter range of the
/// parent curve it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subcurve {
    pub curve: BezierCurve,
    pub interval: Interval,
}

/// Splits a curve into an ordered, contiguous sequence of simple
/// sub-curves.
///
/// Pass 1 splits at derivative extrema; pass 2 greedily extends each piece
/// by a fixed parameter step while it remains simple. When even a
/// single-step piece cannot be made simple (the neighborhood of a cusp),
/// the minimal piece is emitted as-is so that the output always covers
/// `[0, 1]` contiguously.
#[derive(Debug)]
pub struct Reduce {
    curve: BezierCurve,
}

impl Reduce {
    /// Creates a new `Reduce` operation.
    #[must_use]
    pub fn new(curve: BezierCurve) -> Self {
        Self { curve }
    }

    /// Executes the reduction, returning sub-curves ordered by increasing
    /// parameter.
    #[must_use]
    pub fn execute(&self) -> Vec<Subcurve> {
        let whole = Interval::new(0.0, 1.0);
        if matches!(self.curve, BezierCurve::Line(_)) {
            return vec![Subcurve {
                curve: self.curve,
                interval: whole,
            }];
        }

        // Pass 1: split at extrema so each piece has monotone components.
        let mut ts = vec![0.0];
        ts.extend(self.curve.extrema());
        ts.push(1.0);
        ts.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);

        let mut out = Vec::new();
        for w in ts.windows(2) {
            let piece = Subcurve {
                curve: self.curve.split(w[0], w[1]),
                interval: Interval::new(w[0], w[1]),
            };
            reduce_piece(&piece, &mut out);
        }
        out
    }
}

/// Pass 2: greedy scan of one extrema-bounded piece.
fn reduce_piece(piece: &Subcurve, out: &mut Vec<Subcurve>) {
    if piece.curve.is_simple() {
        out.push(*piece);
        return;
    }
    let mut t1 = 0.0;
    while t1 < 1.0 {
        let mut t2 = (t1 + STEP).min(1.0);
        let mut segment = piece.curve.split(t1, t2);
        while t2 < 1.0 {
            let t_next = (t2 + STEP).min(1.0);
            let candidate = piece.curve.split(t1, t_next);
            if !candidate.is_simple() {
                break;
            }
            t2 = t_next;
            segment = candidate;
        }
        out.push(Subcurve {
            curve: segment,
            interval: Interval::new(piece.interval.lerp(t1), piece.interval.lerp(t2)),
        });
        t1 = t2;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::test_helpers::matches_over_interval;
    use crate::geometry::curve::{CubicCurve, LineSegment, QuadraticCurve};
    use crate::math::Point2;

    const TOL: f64 = 1e-6;

    fn non_simple_cubic() -> BezierCurve {
        CubicCurve::new(
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(4.0, 1.0),
        )
        .into()
    }

    #[test]
    fn line_reduces_to_itself() {
        let l: BezierCurve = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(5.0, 1.0)).into();
        let pieces = Reduce::new(l).execute();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].curve, l);
        assert_eq!(pieces[0].interval, Interval::new(0.0, 1.0));
    }

    #[test]
    fn pieces_are_simple() {
        for piece in Reduce::new(non_simple_cubic()).execute() {
            assert!(piece.curve.is_simple());
        }
    }

    #[test]
    fn intervals_cover_the_domain_contiguously() {
        let pieces = Reduce::new(non_simple_cubic()).execute();
        assert!(pieces.len() > 1);
        assert!(pieces[0].interval.start.abs() < TOL);
        assert!((pieces[pieces.len() - 1].interval.end - 1.0).abs() < TOL);
        for w in pieces.windows(2) {
            assert!((w[0].interval.end - w[1].interval.start).abs() < TOL);
            assert!((w[0].curve.ending_point() - w[1].curve.starting_point()).norm() < TOL);
        }
    }

    #[test]
    fn pieces_trace_the_parent_over_their_intervals() {
        let parent = non_simple_cubic();
        for piece in Reduce::new(parent).execute() {
            assert!(matches_over_interval(
                &piece.curve,
                &parent,
                piece.interval.start,
                piece.interval.end,
                1e-5,
            ));
        }
    }

    #[test]
    fn cusp_pieces_cover_the_domain() {
        // The derivative vanishes at t = 0.5. The minimal-step pieces around
        // the cusp cannot be made simple and are emitted as-is, so the
        // reduction still covers [0, 1] without gaps.
        let c: BezierCurve = CubicCurve::new(
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 1.0),
        )
        .into();
        let pieces = Reduce::new(c).execute();
        assert!(pieces[0].interval.start.abs() < TOL);
        assert!((pieces[pieces.len() - 1].interval.end - 1.0).abs() < TOL);
        for w in pieces.windows(2) {
            assert!((w[0].interval.end - w[1].interval.start).abs() < TOL);
        }
        assert!(pieces.iter().any(|p| !p.curve.is_simple()));
    }

    #[test]
    fn quadratic_arch_splits_at_apex() {
        let q: BezierCurve = QuadraticCurve::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 4.0),
            Point2::new(4.0, 0.0),
        )
        .into();
        let pieces = Reduce::new(q).execute();
        // The apex extremum at t = 0.5 is always a boundary.
        assert!(pieces.iter().any(|p| (p.interval.end - 0.5).abs() < TOL
            || (p.interval.start - 0.5).abs() < TOL));
    }
}
