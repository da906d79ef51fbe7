//! Basic 3D types and tolerances for capsule fitting.
//!
//! - `FitCfg`: centralizes epsilons for PCA degeneracy and gradient
//!   singularity handling.
//! - `Capsule`: immutable value type {p0, p1, radius}; a degenerate capsule
//!   with `p0 == p1` is a sphere and stays valid in every dependent
//!   computation (no division by the axis length anywhere).

use std::f64::consts::PI;

use nalgebra::Vector3;

use super::util::distance_point_to_segment;

/// A 3D point (column vector).
pub type Point = Vector3<f64>;

/// A convex polyhedron given by its vertex set; faces are never needed here.
pub type Polyhedron = Vec<Point>;

/// Fitting configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct FitCfg {
    /// PCA degeneracy: a largest covariance eigenvalue at or below this means
    /// the cloud has no usable spread direction (point-like input).
    pub eps_spread: f64,
    /// On-axis singularity: `|point - q|` at or below this makes the distance
    /// gradient switch to the zero sub-gradient for the endpoint partials.
    pub eps_axis: f64,
}

impl Default for FitCfg {
    fn default() -> Self {
        Self {
            eps_spread: 1e-12,
            eps_axis: 1e-12,
        }
    }
}

/// Swept volume of a sphere of radius `radius` travelling along `[p0, p1]`.
///
/// Invariants:
/// - `radius >= 0` for capsules produced by this crate.
/// - `p0 == p1` is legal (pure sphere).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capsule {
    pub p0: Point,
    pub p1: Point,
    pub radius: f64,
}

impl Capsule {
    #[inline]
    pub fn new(p0: Point, p1: Point, radius: f64) -> Self {
        Self { p0, p1, radius }
    }

    /// Degenerate capsule with a zero-length axis.
    #[inline]
    pub fn sphere(center: Point, radius: f64) -> Self {
        Self {
            p0: center,
            p1: center,
            radius,
        }
    }

    /// Axis length `|p1 - p0|`.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).norm()
    }

    /// `pi r^2 L + (4/3) pi r^3`; continuous at `L = 0` (sphere volume).
    #[inline]
    pub fn volume(&self) -> f64 {
        let r = self.radius;
        PI * r * r * self.length() + (4.0 / 3.0) * PI * r * r * r
    }

    /// Signed distance: negative strictly inside, zero on the surface,
    /// positive outside.
    #[inline]
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        distance_point_to_segment(p, &self.p0, &self.p1) - self.radius
    }

    /// Membership check with slack `eps` (positive is permissive).
    #[inline]
    pub fn contains_eps(&self, p: &Point, eps: f64) -> bool {
        self.distance_to_point(p) <= eps
    }
}
