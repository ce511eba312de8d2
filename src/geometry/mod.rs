pub mod arc;
pub mod curve;
pub mod intersection;
pub mod poly_bezier;
pub mod shape;

pub use arc::Arc;
pub use curve::{BezierCurve, CubicCurve, Interval, LineSegment, QuadraticCurve};
pub use intersection::Intersection;
pub use poly_bezier::PolyBezier;
pub use shape::{Cap, Shape};
