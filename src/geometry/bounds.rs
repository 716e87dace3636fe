use crate::math::primitives::signed_area;
use crate::math::vector::PointExt;
use crate::math::{IVector2, Point};

/// Axis-aligned bounding box in integer space.
///
/// An empty box has `min` at `i64::MAX` and `max` at `i64::MIN`, so
/// including any point makes it valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Minimum corner of the bounding box.
    pub min: Point,
    /// Maximum corner of the bounding box.
    pub max: Point,
}

impl Bounds {
    /// Returns the empty (sentinel) box.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point::new(i64::MAX, i64::MAX),
            max: Point::new(i64::MIN, i64::MIN),
        }
    }

    /// Computes the box of a point sequence.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.include(p);
        }
        bounds
    }

    /// Grows the box to contain `p`.
    pub fn include(&mut self, p: &Point) {
        self.min = self.min.component_min(p);
        self.max = self.max.component_max(p);
    }

    /// Grows the box to contain `other`.
    pub fn merge(&mut self, other: &Bounds) {
        if other.is_empty() {
            return;
        }
        self.include(&other.min);
        self.include(&other.max);
    }

    /// Returns `true` if no point has been included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Extent `max - min`; zero for an empty box.
    ///
    /// Exact for coordinates inside the `|coord| < 2^62` range documented on
    /// [`Context`](crate::math::Context).
    #[must_use]
    pub fn size(&self) -> IVector2 {
        if self.is_empty() {
            return IVector2::zeros();
        }
        self.max - self.min
    }

    /// Smaller of the two extents.
    #[must_use]
    pub fn min_dimension(&self) -> i64 {
        let size = self.size();
        size.x.min(size.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// Accumulates the signed area of a closed point fan exactly.
///
/// Triangles `(first, p[i], p[i+1])` are summed as doubled areas in `i128`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaAccumulator {
    doubled: i128,
}

impl AreaAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the doubled signed area of triangle `abc`.
    pub fn add_triangle(&mut self, a: &Point, b: &Point, c: &Point) {
        self.doubled += signed_area(a, b, c);
    }

    /// Sums the fan of a closed ring.
    #[must_use]
    pub fn of_ring(points: &[Point]) -> Self {
        let mut acc = Self::new();
        if let Some((first, rest)) = points.split_first() {
            for pair in rest.windows(2) {
                acc.add_triangle(first, &pair[0], &pair[1]);
            }
        }
        acc
    }

    /// Twice the signed area, exact.
    #[must_use]
    pub fn doubled(&self) -> i128 {
        self.doubled
    }

    /// Signed area (positive for counter-clockwise).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn area(&self) -> f64 {
        self.doubled as f64 * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn empty_bounds_are_sentinels() {
        let b = Bounds::empty();
        assert!(b.is_empty());
        assert_eq!(b.min, p(i64::MAX, i64::MAX));
        assert_eq!(b.max, p(i64::MIN, i64::MIN));
        assert_eq!(b.size(), IVector2::zeros());
    }

    #[test]
    fn include_points() {
        let b = Bounds::from_points(&[p(3, -1), p(-2, 4), p(0, 0)]);
        assert_eq!(b.min, p(-2, -1));
        assert_eq!(b.max, p(3, 4));
        assert_eq!(b.size(), IVector2::new(5, 5));
        assert_eq!(b.min_dimension(), 5);
    }

    #[test]
    fn merge_ignores_empty() {
        let mut b = Bounds::from_points(&[p(0, 0), p(1, 2)]);
        b.merge(&Bounds::empty());
        assert_eq!(b, Bounds::from_points(&[p(0, 0), p(1, 2)]));

        b.merge(&Bounds::from_points(&[p(-5, 10)]));
        assert_eq!(b.min, p(-5, 0));
        assert_eq!(b.max, p(1, 10));
    }

    #[test]
    fn ring_area_signs() {
        let square = [p(0, 0), p(10, 0), p(10, 10), p(0, 10)];
        let acc = AreaAccumulator::of_ring(&square);
        assert_eq!(acc.doubled(), 200);
        assert!((acc.area() - 100.0).abs() < 1e-12);

        let mut reversed = square;
        reversed.reverse();
        assert_eq!(AreaAccumulator::of_ring(&reversed).doubled(), -200);
        assert_eq!(AreaAccumulator::of_ring(&square[..2]).doubled(), 0);
    }

    #[test]
    fn size_spans_full_coordinate_range() {
        let lim = (1_i64 << 62) - 1;
        let b = Bounds::from_points(&[p(-lim, -lim), p(lim, 0)]);
        assert_eq!(b.size(), IVector2::new(2 * lim, lim));
        assert_eq!(b.min_dimension(), lim);
    }
}
