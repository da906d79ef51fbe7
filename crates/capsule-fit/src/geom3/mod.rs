//! 3D geometry: points, capsules, hull reduction, and point-set statistics.
//!
//! Purpose
//! - Provide the small fixed-size primitives the capsule fit is built from:
//!   clamped segment projection, infinite-line distance, covariance, extreme
//!   points, and a convex-hull reducer that returns a vertex subset.
//! - Keep the API minimal and numerically explicit (eps-aware); all shapes are
//!   statically 3-dimensional, no general tensor machinery.
//!
//! Code cross-refs: `types::{Capsule, FitCfg}`, `hull::convex_hull_from_points`,
//! `util::{projection_on_segment, covariance_matrix}`.

pub mod hull;
pub mod rand;
mod types;
mod util;

pub use hull::{convex_hull_from_points, HullError};
pub use types::{Capsule, FitCfg, Point, Polyhedron};
pub use util::{
    centroid, covariance_matrix, distance_point_to_line, distance_point_to_segment,
    extreme_points_along_direction, projection_on_segment, segment_parameter,
};
