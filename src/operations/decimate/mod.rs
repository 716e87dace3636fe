mod collinear;
mod douglas_peucker;
mod vertex_reduction;

pub use collinear::collinear_indices;
pub use douglas_peucker::douglas_peucker_indices;
pub use vertex_reduction::vertex_reduction_indices;

use tracing::debug;

use crate::geometry::Polygon;
use crate::math::{ftoi, Context, Point};

/// Vertex-reduction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decimation {
    /// Greedy distance filter against the last kept point.
    #[default]
    VertexReduction,
    /// Keeps only near-flat vertices; see [`collinear_indices`].
    Collinear,
    /// Recursive max-deviation reduction.
    DouglasPeucker,
}

impl Decimation {
    /// Indices of the points this strategy keeps, in input order.
    #[must_use]
    pub fn indices(self, points: &[Point], tolerance: i64) -> Vec<usize> {
        match self {
            Self::VertexReduction => vertex_reduction_indices(points, tolerance),
            Self::Collinear => collinear_indices(points, tolerance),
            Self::DouglasPeucker => douglas_peucker_indices(points, tolerance),
        }
    }
}

/// Reduces the vertex count of a polygon in place.
///
/// After reduction the area and bounds are recomputed. A closed polygon
/// whose area drops below `tolerance² / 4`, or any polygon left with too
/// few vertices, is invalidated.
#[derive(Debug, Clone, Copy)]
pub struct PolygonDecimate {
    tolerance: i64,
    strategy: Decimation,
}

impl PolygonDecimate {
    /// Creates a new decimation with the default strategy.
    #[must_use]
    pub fn new(tolerance: i64) -> Self {
        Self {
            tolerance,
            strategy: Decimation::default(),
        }
    }

    /// Creates a decimation with a floating-point tolerance.
    #[must_use]
    pub fn from_float(context: &Context, tolerance: f64) -> Self {
        Self::new(ftoi(tolerance, context))
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Decimation) -> Self {
        self.strategy = strategy;
        self
    }

    /// Executes the decimation. A non-positive tolerance leaves the polygon untouched.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, polygon: &mut Polygon) {
        if self.tolerance <= 0 {
            return;
        }

        let before = polygon.count();
        let kept: Vec<Point> = self
            .strategy
            .indices(polygon.points(), self.tolerance)
            .into_iter()
            .map(|i| polygon.points()[i])
            .collect();
        polygon.from_points(kept);

        let tol = self.tolerance as f64;
        let min_area = tol * tol / 4.0;

        if !polygon.is_valid() {
            debug!(strategy = ?self.strategy, before, "decimation left too few vertices");
            polygon.invalidate();
        } else if polygon.is_closed() && polygon.area().abs() < min_area {
            debug!(
                strategy = ?self.strategy,
                area = polygon.area(),
                min_area,
                "decimated polygon is a sliver"
            );
            polygon.invalidate();
        } else {
            debug!(
                strategy = ?self.strategy,
                before,
                after = polygon.count(),
                "decimated polygon"
            );
        }
    }
}

impl Polygon {
    /// Decimates in place with greedy vertex reduction.
    ///
    /// No-op when `tolerance ≤ 0`. Check [`Polygon::is_valid`] afterwards.
    pub fn decimate(&mut self, tolerance: i64) -> &mut Self {
        self.decimate_with(Decimation::default(), tolerance)
    }

    /// Decimates in place with an explicit strategy.
    pub fn decimate_with(&mut self, strategy: Decimation, tolerance: i64) -> &mut Self {
        PolygonDecimate::new(tolerance)
            .with_strategy(strategy)
            .execute(self);
        self
    }

    /// [`Polygon::decimate`] with the tolerance in floating-point units.
    pub fn fdecimate(&mut self, tolerance: f64) -> &mut Self {
        PolygonDecimate::from_float(self.context(), tolerance).execute(self);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    /// A 100x100 square with a few jittered points along the bottom edge.
    fn noisy_square() -> Polygon {
        Polygon::closed(
            Context::default(),
            &[
                p(0, 0),
                p(2, 1),
                p(4, 0),
                p(50, 1),
                p(100, 0),
                p(100, 100),
                p(0, 100),
            ],
        )
    }

    #[test]
    fn zero_tolerance_is_noop() {
        let mut poly = noisy_square();
        let before = poly.points().to_vec();
        poly.decimate(0);
        assert_eq!(poly.points(), before.as_slice());
        poly.decimate(-3);
        assert_eq!(poly.points(), before.as_slice());
    }

    #[test]
    fn vertex_reduction_removes_close_points() {
        let mut poly = noisy_square();
        poly.decimate(5);
        assert!(poly.is_valid());
        assert_eq!(
            poly.points(),
            &[p(0, 0), p(50, 1), p(100, 0), p(100, 100), p(0, 100)]
        );
    }

    #[test]
    fn douglas_peucker_strategy() {
        let mut poly = noisy_square();
        poly.decimate_with(Decimation::DouglasPeucker, 5);
        assert!(poly.is_valid());
        assert_eq!(poly.points(), &[p(0, 0), p(100, 0), p(100, 100), p(0, 100)]);
        assert_relative_eq!(poly.area(), 10_000.0);
    }

    #[test]
    fn collinear_strategy_keeps_flat_points() {
        let mut poly = noisy_square();
        poly.decimate_with(Decimation::Collinear, 5);
        // Corners are dropped, the jitter survives; what is left is a sliver.
        assert!(!poly.is_valid());
    }

    #[test]
    fn huge_tolerance_invalidates() {
        let mut poly = noisy_square();
        poly.decimate_with(Decimation::DouglasPeucker, 1_000_000);
        assert!(!poly.is_valid());
        assert!(poly.is_empty());
        assert!(poly.bounds().is_empty());
    }

    #[test]
    fn sliver_area_invalidates() {
        // A 100x1 strip survives small tolerances; at 30 the reduced
        // triangle's area of 50 is below 30² / 4.
        let mut poly = Polygon::closed(
            Context::default(),
            &[p(0, 0), p(100, 0), p(100, 1), p(0, 1)],
        );
        poly.decimate_with(Decimation::DouglasPeucker, 0);
        assert!(poly.is_valid());
        poly.decimate(1);
        assert!(poly.is_valid());
        let mut thin = Polygon::closed(
            Context::default(),
            &[p(0, 0), p(100, 0), p(100, 1), p(0, 1)],
        );
        thin.decimate_with(Decimation::DouglasPeucker, 30);
        assert!(!thin.is_valid());
    }

    #[test]
    fn decimation_clears_bisector_cache() {
        let mut poly = noisy_square();
        poly.compute_bisectors();
        poly.decimate(5);
        assert!(poly.bisectors().is_none());
    }

    #[test]
    fn open_polyline_is_not_area_checked() {
        let mut line = Polygon::open(
            Context::default(),
            &[p(0, 0), p(10, 1), p(20, 0), p(30, 40)],
        );
        line.decimate_with(Decimation::DouglasPeucker, 5);
        assert!(line.is_valid());
        assert_eq!(line.points(), &[p(0, 0), p(20, 0), p(30, 40)]);
    }

    #[test]
    fn float_tolerance() {
        let ctx = Context::new(10.0).unwrap();
        let mut poly = Polygon::closed(
            ctx,
            &[p(0, 0), p(2, 1), p(100, 0), p(100, 100), p(0, 100)],
        );
        poly.fdecimate(0.5);
        assert_eq!(poly.count(), 4);
    }
}
