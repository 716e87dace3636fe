use super::bounds::{AreaAccumulator, Bounds};
use crate::math::primitives::{bisector, collinear};
use crate::math::vector::{angle_between, PointExt};
use crate::math::{ftoi_point, Context, IVector2, Point, Vector2};

/// Bisector directions and edge/bisector angles, one per vertex.
#[derive(Debug, Clone, PartialEq)]
struct BisectorCache {
    bisectors: Vec<Vector2>,
    angles: Vec<f64>,
}

/// An ordered ring (closed) or chain (open) of integer-space points.
///
/// Construction merges collinear runs so that every kept vertex is a change
/// of direction. A polygon that turns out degenerate is left empty; check
/// [`Polygon::is_valid`] after building, offsetting or decimating.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    context: Context,
    points: Vec<Point>,
    closed: bool,
    area: f64,
    bounds: Bounds,
    cache: Option<BisectorCache>,
}

impl Polygon {
    /// Builds a polygon from `source`, dropping collinear vertices.
    ///
    /// Closed polygons need at least three direction changes, open ones at
    /// least two points; otherwise the result is empty and invalid.
    #[must_use]
    pub fn new(context: Context, source: &[Point], closed: bool) -> Self {
        let mut polygon = Self::empty(context, closed);

        if closed && source.len() < 3 {
            return polygon;
        }

        let mut points: Vec<Point> = Vec::with_capacity(source.len());
        for &spt in source {
            let ct = points.len();
            if ct > 1 && collinear(&points[ct - 2], &points[ct - 1], &spt) {
                points[ct - 1] = spt;
            } else {
                points.push(spt);
            }
        }

        if !Self::meets_minimum(points.len(), closed) {
            return polygon;
        }

        if closed {
            let ct = points.len();
            if collinear(&points[ct - 2], &points[ct - 1], &points[0]) {
                points.pop();
            }
            let ct = points.len();
            if collinear(&points[ct - 1], &points[0], &points[1]) {
                points.remove(0);
            }
        }

        if !Self::meets_minimum(points.len(), closed) {
            return polygon;
        }

        polygon.from_points(points);
        polygon
    }

    /// Builds a closed polygon.
    #[must_use]
    pub fn closed(context: Context, source: &[Point]) -> Self {
        Self::new(context, source, true)
    }

    /// Builds an open polygon (polyline).
    #[must_use]
    pub fn open(context: Context, source: &[Point]) -> Self {
        Self::new(context, source, false)
    }

    /// Builds a polygon from floating-point coordinates scaled by the context.
    #[must_use]
    pub fn from_float_points(context: Context, source: &[[f64; 2]], closed: bool) -> Self {
        let points: Vec<Point> = source.iter().map(|&p| ftoi_point(p, &context)).collect();
        Self::new(context, &points, closed)
    }

    /// An empty, invalid polygon sharing `context`.
    #[must_use]
    pub fn empty(context: Context, closed: bool) -> Self {
        Self {
            context,
            points: Vec::new(),
            closed,
            area: 0.0,
            bounds: Bounds::empty(),
            cache: None,
        }
    }

    /// An empty polygon with the same context and mode as `self`.
    #[must_use]
    pub fn create_new(&self) -> Self {
        Self::empty(self.context, self.closed)
    }

    /// Replaces the point sequence as-is, recomputing area and bounds.
    ///
    /// No collinear pass is made. The bisector cache is cleared.
    pub fn from_points(&mut self, points: Vec<Point>) -> &mut Self {
        self.points = points;
        self.cache = None;
        self.calculate_area();
        self.calculate_bounds();
        self
    }

    /// Puts the polygon into the terminal empty state.
    pub fn invalidate(&mut self) -> &mut Self {
        self.points.clear();
        self.cache = None;
        self.area = 0.0;
        self.bounds = Bounds::empty();
        self
    }

    fn meets_minimum(count: usize, closed: bool) -> bool {
        if closed {
            count >= 3
        } else {
            count >= 2
        }
    }

    /// Closed: at least 3 points. Open: at least 2.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::meets_minimum(self.points.len(), self.closed)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Signed area, positive for counter-clockwise; zero when open.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[must_use]
    pub fn min(&self) -> Point {
        self.bounds.min
    }

    #[must_use]
    pub fn max(&self) -> Point {
        self.bounds.max
    }

    /// Extent of the bounding box.
    #[must_use]
    pub fn size(&self) -> IVector2 {
        self.bounds.size()
    }

    /// Unions this polygon's bounds into `bounds`.
    pub fn merge_bounds_into(&self, bounds: &mut Bounds) {
        bounds.merge(&self.bounds);
    }

    fn calculate_area(&mut self) {
        self.area = if self.closed {
            AreaAccumulator::of_ring(&self.points).area()
        } else {
            0.0
        };
    }

    fn calculate_bounds(&mut self) {
        self.bounds = Bounds::from_points(&self.points);
    }

    /// Consecutive point pairs, including the closing pair of a ring.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        let count = match (self.closed, n) {
            (_, 0 | 1) => 0,
            (true, _) => n,
            (false, _) => n - 1,
        };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Consecutive point triples; wraps around for rings.
    pub fn corners(&self) -> impl Iterator<Item = (Point, Point, Point)> + '_ {
        let n = self.points.len();
        let count = match (self.closed, n) {
            (_, 0..=2) => 0,
            (true, _) => n,
            (false, _) => n - 2,
        };
        (0..count).map(move |i| {
            (
                self.points[i],
                self.points[(i + 1) % n],
                self.points[(i + 2) % n],
            )
        })
    }

    /// Total edge length in integer units.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance(&b)).sum()
    }

    /// Returns `true` if `|area| / perimeter` falls below `tol`.
    #[must_use]
    pub fn is_sliver(&self, tol: f64) -> bool {
        let perimeter = self.perimeter();
        if perimeter <= 0.0 {
            return true;
        }
        self.area.abs() / perimeter < tol
    }

    /// [`Polygon::is_sliver`] with a tolerance of one hundredth of a
    /// floating-point unit.
    #[must_use]
    pub fn is_sliver_default(&self) -> bool {
        self.is_sliver(self.context.scale() / 100.0)
    }

    /// Rotates every point about the origin, snapping back onto the grid.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let rotated = self.points.iter().map(|p| p.rotated(angle)).collect();
        self.from_points(rotated)
    }

    /// Computes per-vertex bisectors and angles once; no-op if cached or open.
    ///
    /// Each bisector points away from the interior whichever the winding.
    /// The stored angle is measured between the next edge and the bisector.
    pub fn compute_bisectors(&mut self) {
        if self.cache.is_some() || !self.closed || self.points.is_empty() {
            return;
        }

        let pts = &self.points;
        let ct = pts.len();
        let flip = self.area < 0.0;
        let mut bisectors = Vec::with_capacity(ct);
        let mut angles = Vec::with_capacity(ct);

        for i in 0..ct {
            let p1 = &pts[(i + ct - 1) % ct];
            let p2 = &pts[i];
            let p3 = &pts[(i + 1) % ct];

            let mut b = bisector(p1, p2, p3);
            if flip {
                b = -b;
            }
            angles.push(angle_between(&p2.vector_to(p3), &b));
            bisectors.push(b);
        }

        self.cache = Some(BisectorCache { bisectors, angles });
    }

    /// Cached bisectors, if computed.
    #[must_use]
    pub fn bisectors(&self) -> Option<&[Vector2]> {
        self.cache.as_ref().map(|c| c.bisectors.as_slice())
    }

    /// Cached angles, if computed.
    #[must_use]
    pub fn angles(&self) -> Option<&[f64]> {
        self.cache.as_ref().map(|c| c.angles.as_slice())
    }
}
