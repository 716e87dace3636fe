pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod report;

pub use error::{ContextError, KernelError, Result};
pub use geometry::{Bounds, Polygon};
pub use math::{Context, Point};
pub use operations::{Decimation, PolygonDecimate, PolygonOffset};
