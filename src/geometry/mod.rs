pub mod bounds;
pub mod polygon;

pub use bounds::{AreaAccumulator, Bounds};
pub use polygon::Polygon;
