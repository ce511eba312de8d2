use super::{Point2, Vector2};

/// An axis-aligned 2D bounding box.
///
/// The empty box is represented by `min = +∞, max = -∞` per axis, so that
/// its union with any real box yields that box unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl BoundingBox {
    /// The empty bounding box, the identity element of [`union`](Self::union).
    pub const EMPTY: Self = Self {
        min: Point2::new(f64::INFINITY, f64::INFINITY),
        max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    };

    /// Creates a bounding box from explicit corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Returns the smallest box containing both `self` and `other`
    /// (componentwise min of mins, max of maxes).
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Grows the box to include `point`.
    pub fn expand(&mut self, point: &Point2) {
        self.min = Point2::new(self.min.x.min(point.x), self.min.y.min(point.y));
        self.max = Point2::new(self.max.x.max(point.x), self.max.y.max(point.y));
    }

    /// Returns whether the two boxes overlap (closed-interval test).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns whether `point` lies inside the box (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Center of the box.
    #[must_use]
    pub fn mid(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Extent of the box along each axis.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }
}
