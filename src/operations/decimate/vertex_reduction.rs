use crate::math::vector::PointExt;
use crate::math::Point;

/// Greedy vertex reduction.
///
/// The first point is the reference; each later point closer than
/// `tolerance` to the current reference is discarded, otherwise it is kept
/// and becomes the new reference. Single pass, order dependent.
#[must_use]
pub fn vertex_reduction_indices(points: &[Point], tolerance: i64) -> Vec<usize> {
    if points.is_empty() {
        return Vec::new();
    }

    let tol_sq = i128::from(tolerance) * i128::from(tolerance);
    let mut indices = Vec::with_capacity(points.len());
    indices.push(0);
    let mut reference = points[0];

    for (i, pt) in points.iter().enumerate().skip(1) {
        if reference.distance_sq(pt) < tol_sq {
            continue;
        }
        indices.push(i);
        reference = *pt;
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn empty_input() {
        assert!(vertex_reduction_indices(&[], 5).is_empty());
    }

    #[test]
    fn drops_points_near_reference() {
        let pts = [p(0, 0), p(1, 0), p(2, 0), p(10, 0), p(11, 1), p(20, 0)];
        assert_eq!(vertex_reduction_indices(&pts, 5), vec![0, 3, 5]);
    }

    #[test]
    fn reference_only_moves_on_kept_points() {
        // Each step is 3 apart, but the reference stays put until 6 away.
        let pts = [p(0, 0), p(3, 0), p(6, 0), p(9, 0), p(12, 0)];
        assert_eq!(vertex_reduction_indices(&pts, 5), vec![0, 2, 4]);
    }

    #[test]
    fn exact_tolerance_distance_is_kept() {
        let pts = [p(0, 0), p(3, 4)];
        assert_eq!(vertex_reduction_indices(&pts, 5), vec![0, 1]);
    }
}
