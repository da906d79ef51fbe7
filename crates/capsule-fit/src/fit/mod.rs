//! Capsule fitting: PCA initial estimate and polyhedron merge orchestration.
//!
//! Purpose
//! - `capsule_from_points` turns a point set into a bounding capsule along the
//!   cloud's principal direction (the pre-optimization estimate).
//! - `compute_bounding_capsule` / `compute_convex_polyhedron` merge several
//!   polyhedra, reduce to the convex hull, and fit (or just return the hull).
//! - `FitProblem` packages objective + constraints + starting point for an
//!   external optimizer without depending on its types.
//!
//! Code cross-refs: `geom3::{covariance_matrix, extreme_points_along_direction,
//! convex_hull_from_points}`, `func::{Volume, DistanceCapsulePoint}`.

mod estimator;
mod merge;

pub use estimator::{capsule_from_points, FitError};
pub use merge::{
    compute_bounding_capsule, compute_convex_polyhedron, merge_polyhedra, FitProblem,
};

#[cfg(test)]
mod tests;
