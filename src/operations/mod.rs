pub mod offset;
pub mod query;
pub mod reduce;

pub use offset::{offset_point, CurveOffset, Outline, OutlineShapes, Scale};
pub use query::{Project, ProjectionResult};
pub use reduce::{Reduce, Subcurve};
