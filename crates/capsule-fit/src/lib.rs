//! Minimal bounding capsules for 3D point clouds and convex polyhedra.
//!
//! Pipeline
//! - Merge input polyhedra into one point set, reduce it to its convex hull,
//!   and fit an initial capsule (cylinder with hemispherical caps) along the
//!   cloud's principal direction.
//! - Expose the capsule volume and per-point signed distance as value+gradient
//!   functions of a 7-scalar parameter vector, so an external constrained
//!   optimizer can tighten the initial fit (`volume` minimized subject to
//!   `distance <= 0` per hull vertex).
//!
//! The crate itself contains no optimizer: `func::DifferentiableFn` is the
//! whole evaluation contract, and `fit::FitProblem` packages objective,
//! constraints, and starting point without depending on any solver's types.

pub mod fit;
pub mod func;
pub mod geom3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fit::{
        capsule_from_points, compute_bounding_capsule, compute_convex_polyhedron, merge_polyhedra,
        FitError, FitProblem,
    };
    pub use crate::func::{
        capsule_to_params, params_to_capsule, DifferentiableFn, DistanceCapsulePoint, Gradient,
        Params, Volume,
    };
    pub use crate::geom3::rand::{draw_cloud, CloudCfg, PointCount, ReplayToken};
    pub use crate::geom3::{
        convex_hull_from_points, Capsule, FitCfg, HullError, Point, Polyhedron,
    };
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}
