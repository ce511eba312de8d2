mod curve_offset;
mod outline;
mod scale;

pub use curve_offset::{offset_point, CurveOffset};
pub use outline::{Outline, OutlineShapes};
pub use scale::Scale;
