use std::f64::consts::{FRAC_PI_2, PI};

use tracing::{debug, trace};

use crate::geometry::Polygon;
use crate::math::primitives::{coincident, orthogonal_right_vector};
use crate::math::vector::PointExt;
use crate::math::{ftoi, Context, Point, TOLERANCE};

/// Offsets a closed polygon by a signed distance along its vertex bisectors.
///
/// Positive distance moves the boundary outward, negative inward; both are
/// in integer units. Each vertex is pushed along its bisector by
/// `distance / sin(angle)`. When that displacement exceeds the polygon's
/// smaller extent the vertex either gets a square cap (when the offset
/// opens the corner) or is dropped (when the offset closes it).
///
/// This is a per-vertex projection, not a robust offset: loops are never
/// split or merged. Results whose area moved the wrong way, flipped
/// winding, or shrank below `tolerance²` are invalidated.
#[derive(Debug, Clone, Copy)]
pub struct PolygonOffset {
    distance: i64,
    tolerance: i64,
}

impl PolygonOffset {
    /// Creates a new offset operation with zero tolerance.
    #[must_use]
    pub fn new(distance: i64) -> Self {
        Self {
            distance,
            tolerance: 0,
        }
    }

    /// Creates an offset operation from floating-point distance and tolerance.
    #[must_use]
    pub fn from_float(context: &Context, distance: f64, tolerance: f64) -> Self {
        Self {
            distance: ftoi(distance, context),
            tolerance: ftoi(tolerance, context),
        }
    }

    /// Sets the minimum spacing of emitted points and minimum result area
    /// (as `tolerance²`).
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: i64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the offset, returning a new polygon.
    ///
    /// The source only changes by having its bisector cache filled. The
    /// returned polygon is invalid (empty) if the offset degenerates.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, source: &mut Polygon) -> Polygon {
        let mut result = source.create_new();

        if !source.is_valid() || !source.is_closed() {
            debug!("offset skipped: source polygon is invalid or open");
            return result;
        }

        let minsize = source.bounds().min_dimension() as f64;
        let minsize_sq = minsize * minsize;
        let dist = self.distance as f64;
        let tol = self.tolerance as f64;
        let tol_sq = tol * tol;

        if dist <= -minsize / 2.0 {
            debug!(
                distance = self.distance,
                minsize, "inward offset collapses the polygon"
            );
            return result;
        }

        source.compute_bisectors();
        let (Some(bisectors), Some(angles)) = (source.bisectors(), source.angles()) else {
            return result;
        };

        let ctx = *source.context();
        let points = source.points();
        let ct = points.len();
        let mut emitter = Emitter::new(ct, tol_sq);
        let mut capped = 0_usize;
        let mut dropped = 0_usize;

        for i in 0..ct {
            let b = &bisectors[i];
            let pti = points[i];

            // Stored angles are relative to the outward bisector.
            let a = if dist > 0.0 { angles[i] } else { PI - angles[i] };
            let d = if self.distance == 0 { 0.0 } else { dist / a.sin() };
            let displacement = b * d;

            let overflow = !d.is_finite() || displacement.norm_squared() > minsize_sq;
            if !overflow {
                emitter.push(pti.add_scaled(b, d));
                continue;
            }

            if a <= FRAC_PI_2 {
                dropped += 1;
                continue;
            }

            // Square cap perpendicular to the bisector, `|dist|` out from the vertex.
            let half_angle = (a - FRAC_PI_2) / 2.0;
            let half_len = dist.abs() * half_angle.tan();
            let across = orthogonal_right_vector(b);
            let mid = pti.add_scaled(b, dist);
            let c0 = mid.add_scaled(&across, -half_len);
            let c1 = mid.add_scaled(&across, half_len);

            if coincident(&c0, &c1, &ctx) {
                emitter.push(if d.is_finite() {
                    pti.add_scaled(b, d)
                } else {
                    mid
                });
            } else {
                let prev = points[(i + ct - 1) % ct];
                let (first, second) = order_along_edge(&prev, &pti, c0, c1);
                emitter.push(first);
                emitter.push(second);
                capped += 1;
            }
        }

        trace!(
            vertices = ct,
            emitted = emitter.points.len(),
            capped,
            dropped,
            "offset vertices placed"
        );

        result.from_points(emitter.points);

        let source_area = source.area();
        let result_area = result.area();

        if !result.is_valid() {
            debug!("offset left too few vertices");
            result.invalidate();
        } else if result_area * source_area < 0.0 {
            debug!(source_area, result_area, "offset flipped winding");
            result.invalidate();
        } else if dist < 0.0 && result_area.abs() > source_area.abs() {
            debug!(source_area, result_area, "inward offset grew the polygon");
            result.invalidate();
        } else if dist > 0.0 && result_area.abs() < source_area.abs() {
            debug!(source_area, result_area, "outward offset shrank the polygon");
            result.invalidate();
        } else if result_area.abs() < tol_sq {
            debug!(result_area, tol_sq, "offset result below minimum area");
            result.invalidate();
        }

        result
    }
}

/// Collects offset points, skipping any within `tolerance` of the last one.
struct Emitter {
    points: Vec<Point>,
    tol_sq: f64,
}

impl Emitter {
    fn new(capacity: usize, tol_sq: f64) -> Self {
        Self {
            points: Vec::with_capacity(capacity + capacity / 2),
            tol_sq,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn push(&mut self, pt: Point) {
        if let Some(last) = self.points.last() {
            if last.distance_sq(&pt) as f64 <= self.tol_sq {
                return;
            }
        }
        self.points.push(pt);
    }
}

/// Orders the two cap endpoints so the one reached first when walking the
/// edge `prev → vertex` comes first.
fn order_along_edge(prev: &Point, vertex: &Point, c0: Point, c1: Point) -> (Point, Point) {
    let dir = prev.vector_to(vertex);
    if dir.norm() < TOLERANCE {
        return (c0, c1);
    }
    let t0 = dir.dot(&prev.vector_to(&c0));
    let t1 = dir.dot(&prev.vector_to(&c1));
    if t0 <= t1 {
        (c0, c1)
    } else {
        (c1, c0)
    }
}

impl Polygon {
    /// Offsets the polygon by `distance` integer units (positive outward).
    ///
    /// See [`PolygonOffset`]. Check [`Polygon::is_valid`] on the result.
    #[must_use]
    pub fn offset(&mut self, distance: i64, tolerance: i64) -> Polygon {
        PolygonOffset::new(distance)
            .with_tolerance(tolerance)
            .execute(self)
    }

    /// [`Polygon::offset`] with distance and tolerance in floating-point units.
    #[must_use]
    pub fn foffset(&mut self, distance: f64, tolerance: f64) -> Polygon {
        let op = PolygonOffset::from_float(self.context(), distance, tolerance);
        op.execute(self)
    }
}
