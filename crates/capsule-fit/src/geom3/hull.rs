//! Convex hull reduction in 3D (vertex subset only).
//!
//! Purpose
//! - Reduce a point cloud to the vertices of its convex hull before capsule
//!   fitting; hull vertices alone determine the bounding fit, so the optimizer
//!   needs one distance constraint per hull vertex instead of per input point.
//!
//! Why this design
//! - Output is a subset of the input points, never synthesized vertices, so a
//!   distance constraint on a hull vertex is a constraint on a real input.
//! - Degenerate spreads are tolerated: a single point, a segment (two extreme
//!   points), or a planar polygon come back as smaller vertex sets instead of
//!   failing. Genuine precision failures surface as `HullError::Precision`;
//!   a hull that excludes an input point is never returned.
//!
//! Algorithm
//! - Lexicographic sort + dedup, then a spanning probe (farthest point, line,
//!   plane) decides the dimensionality. Full-dimensional input runs an
//!   incremental beneath-beyond hull over triangle faces; planar input runs a
//!   monotone-chain hull in the plane basis.
//! - Incremental insertion can keep a point that sits on a facet or edge of
//!   the final hull (its faces are coplanar with the true facet, so later
//!   corner insertions never see them as visible). A final pass merges
//!   coplanar faces into facets and keeps only each facet polygon's 2D hull
//!   vertices, so the reported set is extreme points only.

use std::fmt;

use super::types::Point;
use super::util::extreme_points_along_direction;

/// Visibility/flatness tolerance for hull predicates (absolute distances).
const HULL_EPS: f64 = 1e-9;
/// Coincidence tolerance when deduplicating input points.
const DEDUP_EPS: f64 = 1e-12;
/// Slack allowed when certifying that every input point lies inside the hull.
const CONTAIN_EPS: f64 = 1e-7;
/// Unit-normal agreement tolerance when merging coplanar faces into facets.
const FACET_EPS: f64 = 1e-9;

/// Errors surfaced by hull reduction.
#[derive(Debug)]
pub enum HullError {
    /// Empty input point set.
    NoPoints,
    /// A face could not be oriented within tolerance, or the certified hull
    /// would exclude an input point.
    Precision,
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NoPoints => write!(f, "cannot compute the hull of an empty point set"),
            HullError::Precision => {
                write!(f, "hull construction lost precision (degenerate face or containment check failed)")
            }
        }
    }
}

/// Convex hull of `points`, returned as the subset of input points that are
/// hull vertices.
///
/// Degenerate inputs yield degenerate hulls (one point, a segment, a planar
/// polygon); callers must tolerate fewer than 4 vertices.
pub fn convex_hull_from_points(points: &[Point]) -> Result<Vec<Point>, HullError> {
    if points.is_empty() {
        return Err(HullError::NoPoints);
    }
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(cmp_lex);
    pts.dedup_by(|a, b| (*a - *b).norm() < DEDUP_EPS);
    if pts.len() == 1 {
        return Ok(pts);
    }

    // Spanning probe: farthest point, then farthest from line, then plane.
    let a = pts[0];
    let i1 = farthest_from_point(&pts, &a);
    let b = pts[i1];
    if (b - a).norm() < DEDUP_EPS {
        return Ok(vec![a]);
    }
    let (i2, d_line) = farthest_from_line(&pts, &a, &b);
    if d_line <= HULL_EPS {
        return Ok(collinear_hull(&pts, &a, &b));
    }
    let c = pts[i2];
    let n = (b - a).cross(&(c - a));
    let n_norm = n.norm();
    if n_norm <= 0.0 {
        return Err(HullError::Precision);
    }
    let n_unit = n / n_norm;
    let (i3, d_plane) = farthest_from_plane(&pts, &a, &n_unit);
    if d_plane <= HULL_EPS {
        return planar_hull(&pts, &a, &n_unit);
    }
    incremental_hull(&pts, [0, i1, i2, i3])
}

#[inline]
fn cmp_lex(a: &Point, b: &Point) -> std::cmp::Ordering {
    a.x.total_cmp(&b.x)
        .then(a.y.total_cmp(&b.y))
        .then(a.z.total_cmp(&b.z))
}

fn farthest_from_point(pts: &[Point], a: &Point) -> usize {
    let mut best = 0usize;
    let mut best_d = 0.0f64;
    for (i, p) in pts.iter().enumerate() {
        let d = (p - a).norm_squared();
        if d > best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

fn farthest_from_line(pts: &[Point], a: &Point, b: &Point) -> (usize, f64) {
    let dir = b - a;
    let n2 = dir.norm_squared();
    let mut best = 0usize;
    let mut best_d = 0.0f64;
    for (i, p) in pts.iter().enumerate() {
        let d = p - a;
        let d_perp = (d - dir * (d.dot(&dir) / n2)).norm();
        if d_perp > best_d {
            best_d = d_perp;
            best = i;
        }
    }
    (best, best_d)
}

fn farthest_from_plane(pts: &[Point], a: &Point, n_unit: &Point) -> (usize, f64) {
    let mut best = 0usize;
    let mut best_d = 0.0f64;
    for (i, p) in pts.iter().enumerate() {
        let d = (p - a).dot(n_unit).abs();
        if d > best_d {
            best_d = d;
            best = i;
        }
    }
    (best, best_d)
}

/// All points lie on the line through `a`, `b`: hull is the two extremes.
fn collinear_hull(pts: &[Point], a: &Point, b: &Point) -> Vec<Point> {
    let dir = b - a;
    let (imin, imax) = extreme_points_along_direction(&dir, pts);
    vec![pts[imin], pts[imax]]
}

/// All points lie in the plane through `a` with unit normal `n_unit`: run a
/// 2D monotone chain in an orthonormal plane basis (CCW vertex order).
fn planar_hull(pts: &[Point], a: &Point, n_unit: &Point) -> Result<Vec<Point>, HullError> {
    let (u, v) = plane_basis(n_unit);
    let coords: Vec<(f64, f64)> = pts
        .iter()
        .map(|p| {
            let d = p - a;
            (u.dot(&d), v.dot(&d))
        })
        .collect();
    let hull = monotone_chain(&coords);
    if hull.len() < 3 {
        return Err(HullError::Precision);
    }
    Ok(hull.into_iter().map(|i| pts[i]).collect())
}

/// Orthonormal basis of the plane with unit normal `n_unit`. The seed axis
/// least aligned with the normal keeps the cross product well away from zero.
fn plane_basis(n_unit: &Point) -> (Point, Point) {
    let seed = if n_unit.x.abs() <= n_unit.y.abs() && n_unit.x.abs() <= n_unit.z.abs() {
        Point::new(1.0, 0.0, 0.0)
    } else if n_unit.y.abs() <= n_unit.z.abs() {
        Point::new(0.0, 1.0, 0.0)
    } else {
        Point::new(0.0, 0.0, 1.0)
    };
    let u = seed.cross(n_unit).normalize();
    let v = n_unit.cross(&u);
    (u, v)
}

/// Andrew's monotone chain over 2D coordinates; returns hull indices in CCW
/// order, strict (collinear boundary points dropped).
fn monotone_chain(coords: &[(f64, f64)]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..coords.len()).collect();
    order.sort_by(|&i, &j| {
        coords[i]
            .0
            .total_cmp(&coords[j].0)
            .then(coords[i].1.total_cmp(&coords[j].1))
    });
    let cross = |o: usize, p: usize, q: usize| -> f64 {
        let (ox, oy) = coords[o];
        let (px, py) = coords[p];
        let (qx, qy) = coords[q];
        (px - ox) * (qy - oy) - (py - oy) * (qx - ox)
    };
    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], i) <= 0.0 {
            lower.pop();
        }
        lower.push(i);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], i) <= 0.0 {
            upper.pop();
        }
        upper.push(i);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Signed distance of `p` above the plane of face `f` (outward-positive).
#[inline]
fn face_distance(pts: &[Point], f: [usize; 3], p: &Point) -> f64 {
    let a = pts[f[0]];
    let n = (pts[f[1]] - a).cross(&(pts[f[2]] - a));
    let norm = n.norm();
    if norm <= 0.0 {
        return 0.0;
    }
    (p - a).dot(&n) / norm
}

/// Reorder `tri` so its normal points away from `interior`.
fn orient_outward(pts: &[Point], tri: [usize; 3], interior: &Point) -> Result<[usize; 3], HullError> {
    let a = pts[tri[0]];
    let n = (pts[tri[1]] - a).cross(&(pts[tri[2]] - a));
    if n.norm() <= DEDUP_EPS {
        return Err(HullError::Precision);
    }
    if n.dot(&(interior - a)) > 0.0 {
        Ok([tri[0], tri[2], tri[1]])
    } else {
        Ok(tri)
    }
}

/// Beneath-beyond incremental hull seeded with a non-degenerate tetrahedron.
fn incremental_hull(pts: &[Point], seed: [usize; 4]) -> Result<Vec<Point>, HullError> {
    // The seed tetrahedron centroid stays strictly interior as the hull grows.
    let interior =
        (pts[seed[0]] + pts[seed[1]] + pts[seed[2]] + pts[seed[3]]) / 4.0;
    let mut faces: Vec<[usize; 3]> = Vec::with_capacity(4);
    for tri in [
        [seed[0], seed[1], seed[2]],
        [seed[0], seed[1], seed[3]],
        [seed[0], seed[2], seed[3]],
        [seed[1], seed[2], seed[3]],
    ] {
        faces.push(orient_outward(pts, tri, &interior)?);
    }

    for i in 0..pts.len() {
        if seed.contains(&i) {
            continue;
        }
        let p = pts[i];
        let mut visible: Vec<[usize; 3]> = Vec::new();
        let mut next: Vec<[usize; 3]> = Vec::new();
        for &f in &faces {
            if face_distance(pts, f, &p) > HULL_EPS {
                visible.push(f);
            } else {
                next.push(f);
            }
        }
        if visible.is_empty() {
            // On or inside the current hull within tolerance.
            continue;
        }
        // Horizon: directed edges of visible faces whose reverse edge is not
        // itself an edge of a visible face.
        let mut edges: Vec<(usize, usize)> = Vec::with_capacity(3 * visible.len());
        for f in &visible {
            for k in 0..3 {
                edges.push((f[k], f[(k + 1) % 3]));
            }
        }
        for &(s, e) in &edges {
            if edges.contains(&(e, s)) {
                continue;
            }
            next.push(orient_outward(pts, [s, e, i], &interior)?);
        }
        faces = next;
    }

    // Certify containment before reporting the vertex subset.
    for p in pts {
        for &f in &faces {
            if face_distance(pts, f, p) > CONTAIN_EPS {
                return Err(HullError::Precision);
            }
        }
    }

    let verts = facet_vertices(pts, &faces);
    Ok(verts.into_iter().map(|i| pts[i]).collect())
}

/// Merge coplanar faces into facets and keep only polygon vertices.
///
/// A face vertex that lies on a facet interior or edge (inserted before the
/// corners dominating it) is not extreme; running the strict 2D chain per
/// merged facet drops it. A convex hull has exactly one facet per supporting
/// plane, so grouping by (unit normal, offset) is unambiguous.
fn facet_vertices(pts: &[Point], faces: &[[usize; 3]]) -> Vec<usize> {
    struct Facet {
        n: Point,
        off: f64,
        verts: Vec<usize>,
    }
    let mut facets: Vec<Facet> = Vec::new();
    for &f in faces {
        let a = pts[f[0]];
        let n = (pts[f[1]] - a).cross(&(pts[f[2]] - a));
        let norm = n.norm();
        if norm <= 0.0 {
            continue;
        }
        let n = n / norm;
        let off = n.dot(&a);
        match facets
            .iter_mut()
            .find(|g| (g.n - n).norm() < FACET_EPS && (g.off - off).abs() < HULL_EPS)
        {
            Some(g) => g.verts.extend_from_slice(&f),
            None => facets.push(Facet {
                n,
                off,
                verts: f.to_vec(),
            }),
        }
    }
    let mut out: Vec<usize> = Vec::new();
    for g in &mut facets {
        g.verts.sort_unstable();
        g.verts.dedup();
        if g.verts.len() <= 3 {
            out.extend_from_slice(&g.verts);
            continue;
        }
        let (u, v) = plane_basis(&g.n);
        let origin = pts[g.verts[0]];
        let coords: Vec<(f64, f64)> = g
            .verts
            .iter()
            .map(|&i| {
                let d = pts[i] - origin;
                (u.dot(&d), v.dot(&d))
            })
            .collect();
        for k in monotone_chain(&coords) {
            out.push(g.verts[k]);
        }
    }
    out.sort_unstable();
    out.dedup();
    out
}
