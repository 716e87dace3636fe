use super::{IVector2, Point, Vector2, TOLERANCE};

/// Integer-space point arithmetic that nalgebra does not provide directly.
pub trait PointExt {
    /// Returns `self + v * s`, rounded back onto the integer grid.
    #[must_use]
    fn add_scaled(&self, v: &Vector2, s: f64) -> Point;

    /// Squared Euclidean distance, exact in integer space.
    #[must_use]
    fn distance_sq(&self, other: &Point) -> i128;

    /// Euclidean distance.
    #[must_use]
    fn distance(&self, other: &Point) -> f64;

    /// Floating-point vector from `self` to `other`.
    #[must_use]
    fn vector_to(&self, other: &Point) -> Vector2;

    /// Rotates the point about the origin by `angle` radians (CCW positive).
    #[must_use]
    fn rotated(&self, angle: f64) -> Point;

    /// Componentwise minimum.
    #[must_use]
    fn component_min(&self, other: &Point) -> Point;

    /// Componentwise maximum.
    #[must_use]
    fn component_max(&self, other: &Point) -> Point;
}

impl PointExt for Point {
    fn add_scaled(&self, v: &Vector2, s: f64) -> Point {
        let f = to_float(&self.coords) + v * s;
        from_float(&f)
    }

    fn distance_sq(&self, other: &Point) -> i128 {
        let dx = i128::from(other.x) - i128::from(self.x);
        let dy = i128::from(other.y) - i128::from(self.y);
        dx * dx + dy * dy
    }

    #[allow(clippy::cast_precision_loss)]
    fn distance(&self, other: &Point) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }

    fn vector_to(&self, other: &Point) -> Vector2 {
        to_float(&(other - self))
    }

    fn rotated(&self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        let v = to_float(&self.coords);
        from_float(&Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos))
    }

    fn component_min(&self, other: &Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    fn component_max(&self, other: &Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }
}

/// Converts an integer-space vector to floating point.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_float(v: &IVector2) -> Vector2 {
    Vector2::new(v.x as f64, v.y as f64)
}

/// Rounds a floating-point vector onto the integer grid.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_float(v: &Vector2) -> Point {
    Point::new(v.x.round() as i64, v.y.round() as i64)
}

/// Unsigned angle in `[0, π]` between two vectors; zero if either is degenerate.
#[must_use]
pub fn angle_between(u: &Vector2, v: &Vector2) -> f64 {
    let denom = u.norm() * v.norm();
    if denom < TOLERANCE {
        return 0.0;
    }
    (u.dot(v) / denom).clamp(-1.0, 1.0).acos()
}
