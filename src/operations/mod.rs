pub mod decimate;
pub mod offset;

pub use decimate::{Decimation, PolygonDecimate};
pub use offset::PolygonOffset;
