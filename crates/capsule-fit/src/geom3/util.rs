//! Point/segment/line primitives and point-set statistics.
//!
//! All functions are pure and total over finite inputs; degenerate segments
//! (`a == b`) reduce to point-to-point cases rather than dividing by zero.

use nalgebra::Matrix3;

use super::types::Point;

/// Unclamped segment parameter `t = (p-a)·(b-a) / |b-a|^2`.
///
/// The closest point on the infinite line through `a`, `b` is `a + t (b-a)`;
/// clamping `t` to `[0,1]` yields the segment projection. Returns `0` when
/// `a == b` so the degenerate segment projects everything onto `a`.
#[inline]
pub fn segment_parameter(p: &Point, a: &Point, b: &Point) -> f64 {
    let ab = b - a;
    let denom = ab.norm_squared();
    if denom <= 0.0 {
        return 0.0;
    }
    (p - a).dot(&ab) / denom
}

/// Closest point to `p` on the clamped segment `[a, b]`.
#[inline]
pub fn projection_on_segment(p: &Point, a: &Point, b: &Point) -> Point {
    let t = segment_parameter(p, a, b).clamp(0.0, 1.0);
    a + (b - a) * t
}

/// Distance from `p` to the clamped segment `[a, b]`.
#[inline]
pub fn distance_point_to_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    (p - projection_on_segment(p, a, b)).norm()
}

/// Distance from `point` to the *infinite* line through `line_point` along
/// `dir` (not necessarily unit). Falls back to point-to-point distance when
/// `dir` is zero.
///
/// Used by the initial radius estimate only; the refined capsule distance
/// clamps to the finite segment instead.
#[inline]
pub fn distance_point_to_line(point: &Point, line_point: &Point, dir: &Point) -> f64 {
    let n2 = dir.norm_squared();
    let d = point - line_point;
    if n2 <= 0.0 {
        return d.norm();
    }
    (d - dir * (d.dot(dir) / n2)).norm()
}

/// Mean point. Precondition: `points` is non-empty.
pub fn centroid(points: &[Point]) -> Point {
    debug_assert!(!points.is_empty(), "centroid of empty point set");
    let mut acc = Point::zeros();
    for p in points {
        acc += p;
    }
    acc / (points.len() as f64)
}

/// `(1/N) Σ (p - c)(p - c)ᵀ`, symmetric positive semi-definite.
/// Precondition: `points` is non-empty.
pub fn covariance_matrix(points: &[Point]) -> Matrix3<f64> {
    let c = centroid(points);
    let mut m = Matrix3::zeros();
    for p in points {
        let d = p - c;
        m += d * d.transpose();
    }
    m / (points.len() as f64)
}

/// Indices `(imin, imax)` of the points with least and greatest signed
/// projection `p·dir`. Ties keep the first occurrence in input order.
/// Precondition: `points` is non-empty.
pub fn extreme_points_along_direction(dir: &Point, points: &[Point]) -> (usize, usize) {
    debug_assert!(!points.is_empty(), "extreme points of empty point set");
    let mut imin = 0usize;
    let mut imax = 0usize;
    let mut lo = points[0].dot(dir);
    let mut hi = lo;
    for (i, p) in points.iter().enumerate().skip(1) {
        let s = p.dot(dir);
        if s < lo {
            lo = s;
            imin = i;
        }
        if s > hi {
            hi = s;
            imax = i;
        }
    }
    (imin, imax)
}
