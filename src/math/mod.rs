pub mod context;
pub mod primitives;
pub mod vector;

pub use context::{ftoi, ftoi_point, itof, itof_point, Context};

/// Point in the integer coordinate space.
pub type Point = nalgebra::Point2<i64>;

/// Integer-space displacement.
pub type IVector2 = nalgebra::Vector2<i64>;

/// Floating-point 2D vector, used for directions such as bisectors.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for floating-point direction comparisons.
pub const TOLERANCE: f64 = 1e-10;
