use std::cmp::Ordering;

/// A curve-curve intersection, as a pair of parameters on the two curves.
///
/// The ordering is lexicographic on `(t1, t2)`, so sorted intersection
/// lists run along the first curve. Equality follows the same total order
/// (`f64::total_cmp`), which keeps `-0.0` and `0.0` distinct.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// Parameter on the first curve.
    pub t1: f64,
    /// Parameter on the second curve.
    pub t2: f64,
}

impl Intersection {
    /// Creates a new intersection record.
    #[must_use]
    pub fn new(t1: f64, t2: f64) -> Self {
        Self { t1, t2 }
    }
}

impl PartialOrd for Intersection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Intersection {}

impl Ord for Intersection {
    fn cmp(&self, other: &Self) -> Ordering {
        self.t1
            .total_cmp(&other.t1)
            .then_with(|| self.t2.total_cmp(&other.t2))
    }
}
