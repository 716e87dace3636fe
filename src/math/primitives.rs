use super::vector::PointExt;
use super::{Context, Point, Vector2, TOLERANCE};

/// Cross product of `b - a` and `c - a`, exact in `i128` for `|coord| < 2^62`.
fn cross(a: &Point, b: &Point, c: &Point) -> i128 {
    let abx = i128::from(b.x) - i128::from(a.x);
    let aby = i128::from(b.y) - i128::from(a.y);
    let acx = i128::from(c.x) - i128::from(a.x);
    let acy = i128::from(c.y) - i128::from(a.y);
    abx * acy - aby * acx
}

/// Returns `true` if `a`, `b`, `c` lie on one line.
///
/// Coordinates are integral, so the test is exact.
#[must_use]
pub fn collinear(a: &Point, b: &Point, c: &Point) -> bool {
    cross(a, b, c) == 0
}

/// Twice the signed area of triangle `abc`.
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(a: &Point, b: &Point, c: &Point) -> i128 {
    cross(a, b, c)
}

/// Squared height of `b` above the chord `a–c`.
///
/// Has the dimension of a squared length, so it compares directly against a
/// squared tolerance. Falls back to `|b - a|²` when the chord is degenerate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn normalized_area(a: &Point, b: &Point, c: &Point) -> f64 {
    let chord_sq = a.distance_sq(c);
    if chord_sq == 0 {
        return a.distance_sq(b) as f64;
    }
    let area = cross(a, b, c) as f64;
    area * area / chord_sq as f64
}

/// Unit bisector of the corner at `p2` on the walk `p1 → p2 → p3`.
///
/// The bisector points to the right of the walk, which is outward for a
/// counter-clockwise polygon. On a full reversal it continues along
/// `p1 → p2`. Returns the zero vector when either edge has zero length.
#[must_use]
pub fn bisector(p1: &Point, p2: &Point, p3: &Point) -> Vector2 {
    let (Some(e1), Some(e2)) = (
        p1.vector_to(p2).try_normalize(TOLERANCE),
        p2.vector_to(p3).try_normalize(TOLERANCE),
    ) else {
        return Vector2::zeros();
    };

    orthogonal_right_vector(&(e1 + e2))
        .try_normalize(TOLERANCE)
        .unwrap_or(e1)
}

/// Rotates `v` by 90° clockwise.
#[must_use]
pub fn orthogonal_right_vector(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Squared perpendicular distance from `p` to the infinite line through `a`, `b`.
///
/// Degenerates to the squared distance to `a` when `a == b`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn distance_to_line_sq(a: &Point, b: &Point, p: &Point) -> f64 {
    let len_sq = a.distance_sq(b);
    if len_sq == 0 {
        return a.distance_sq(p) as f64;
    }
    let c = cross(a, b, p) as f64;
    c * c / len_sq as f64
}

/// Returns `true` if `a` and `b` are closer than the context epsilon.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn coincident(a: &Point, b: &Point, ctx: &Context) -> bool {
    (a.distance_sq(b) as f64) < ctx.epsilon()
}
