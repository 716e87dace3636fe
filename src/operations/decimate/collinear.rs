use crate::math::primitives::normalized_area;
use crate::math::Point;

/// Keeps the points whose corner with their two ring neighbours is flatter
/// than `tolerance`.
///
/// For each point the squared height over the chord joining its neighbours
/// (wrapping at both ends) is compared to `tolerance²`, and the point is
/// kept when it is *below*. Sharper corners are dropped.
#[must_use]
pub fn collinear_indices(points: &[Point], tolerance: i64) -> Vec<usize> {
    let ct = points.len();
    if ct < 3 {
        return (0..ct).collect();
    }

    #[allow(clippy::cast_precision_loss)]
    let tol_sq = (tolerance as f64) * (tolerance as f64);

    (0..ct)
        .filter(|&i| {
            let prev = &points[(i + ct - 1) % ct];
            let next = &points[(i + 1) % ct];
            normalized_area(prev, &points[i], next) < tol_sq
        })
        .collect()
}
