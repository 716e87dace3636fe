use crate::math::primitives::distance_to_line_sq;
use crate::math::Point;

/// Returns the indices kept by recursive max-deviation (Douglas-Peucker)
/// reduction, in order.
///
/// Both endpoints are always kept. A window `[i, j]` is split at its
/// farthest interior point when that point's squared distance to the chord
/// exceeds `tolerance²`. A non-positive tolerance keeps every point,
/// including points lying exactly on a chord.
#[must_use]
pub fn douglas_peucker_indices(points: &[Point], tolerance: i64) -> Vec<usize> {
    let ct = points.len();
    if tolerance <= 0 {
        return (0..ct).collect();
    }
    if ct == 0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let tol_sq = (tolerance as f64) * (tolerance as f64);

    let mut marked = vec![false; ct];
    marked[0] = true;
    marked[ct - 1] = true;

    mark_window(points, &mut marked, tol_sq, 0, ct - 1);

    marked
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect()
}

fn mark_window(points: &[Point], marked: &mut [bool], tol_sq: f64, i: usize, j: usize) {
    if j <= i + 1 {
        return;
    }

    let (pi, pj) = (&points[i], &points[j]);
    let mut max_dist_sq = 0.0;
    let mut idx = i;

    for (k, pt) in points.iter().enumerate().take(j).skip(i + 1) {
        let dist_sq = distance_to_line_sq(pi, pj, pt);
        if dist_sq > max_dist_sq {
            max_dist_sq = dist_sq;
            idx = k;
        }
    }

    if max_dist_sq > tol_sq {
        marked[idx] = true;
        mark_window(points, marked, tol_sq, i, idx);
        mark_window(points, marked, tol_sq, idx, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn empty_and_single() {
        assert!(douglas_peucker_indices(&[], 1).is_empty());
        assert_eq!(douglas_peucker_indices(&[p(4, 4)], 1), vec![0]);
    }

    #[test]
    fn straight_run_reduces_to_endpoints() {
        let pts = [p(0, 0), p(10, 1), p(20, -1), p(30, 0)];
        assert_eq!(douglas_peucker_indices(&pts, 2), vec![0, 3]);
    }

    #[test]
    fn keeps_significant_peak() {
        let pts = [p(0, 0), p(10, 24), p(20, 50), p(30, 26), p(40, 0)];
        assert_eq!(douglas_peucker_indices(&pts, 5), vec![0, 2, 4]);
    }

    #[test]
    fn zero_tolerance_keeps_every_point() {
        let pts = [p(0, 0), p(10, 3), p(20, -4), p(30, 6), p(40, 0)];
        assert_eq!(douglas_peucker_indices(&pts, 0), vec![0, 1, 2, 3, 4]);

        // Points exactly on the chord survive too.
        let flat = [p(0, 0), p(10, 0), p(20, 0), p(30, 0)];
        assert_eq!(douglas_peucker_indices(&flat, 0), vec![0, 1, 2, 3]);
        assert_eq!(douglas_peucker_indices(&flat, -2), vec![0, 1, 2, 3]);
        assert_eq!(douglas_peucker_indices(&flat, 1), vec![0, 3]);
    }

    #[test]
    fn huge_tolerance_keeps_endpoints() {
        let pts = [p(0, 0), p(100, 0), p(100, 100), p(0, 100), p(-5, 50)];
        assert_eq!(douglas_peucker_indices(&pts, 1_000_000), vec![0, 4]);
    }

    #[test]
    fn split_uses_window_maximum() {
        // The farthest point (index 1) is not the last one examined; the
        // window must split on it even though index 3 is within tolerance.
        let pts = [p(0, 0), p(10, 40), p(20, 0), p(30, 1), p(40, 0)];
        let kept = douglas_peucker_indices(&pts, 10);
        assert!(kept.contains(&1));
        assert_eq!(kept, vec![0, 1, 2, 4]);
    }
}
