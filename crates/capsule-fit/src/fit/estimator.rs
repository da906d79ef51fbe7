//! PCA-based initial capsule estimate.
//!
//! The axis follows the eigenvector of the covariance matrix with the largest
//! eigenvalue (direction of maximal spread), the endpoints are the extreme
//! projections onto the centroid line along that axis, and the radius is the
//! largest distance from any point to the *infinite* axis line. The caps are
//! therefore loose on purpose: shortening the cylinder and tightening the
//! hemispheres is the job of the subsequent optimization phase, which uses the
//! clamped segment distance instead.

use std::fmt;

use nalgebra::SymmetricEigen;

use crate::geom3::{
    centroid, covariance_matrix, distance_point_to_line, extreme_points_along_direction, Capsule,
    FitCfg, HullError, Point,
};

/// Errors surfaced by capsule fitting.
#[derive(Debug)]
pub enum FitError {
    /// Nothing to fit; never defaulted to a zero capsule.
    EmptyPointSet,
    /// Hull reduction failed before the estimator ran.
    Hull(HullError),
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::EmptyPointSet => write!(f, "cannot fit a capsule to an empty point set"),
            FitError::Hull(e) => write!(f, "hull reduction failed: {}", e),
        }
    }
}

/// Fit a bounding capsule over `points` along the principal spread direction.
///
/// Degenerate inputs fall back without failing: a point-like cloud (largest
/// covariance eigenvalue at or below `cfg.eps_spread`) yields a sphere at the
/// centroid whose radius covers every point; a single point yields exactly
/// `p0 = p1 = point, radius = 0`. Collinear clouds get a well-defined axis and
/// a radius of numerical-noise size, clamped to stay nonnegative.
pub fn capsule_from_points(points: &[Point], cfg: FitCfg) -> Result<Capsule, FitError> {
    if points.is_empty() {
        return Err(FitError::EmptyPointSet);
    }
    let center = centroid(points);
    let cov = covariance_matrix(points);
    let eigen = SymmetricEigen::new(cov);

    let mut k = 0usize;
    for i in 1..3 {
        if eigen.eigenvalues[i] > eigen.eigenvalues[k] {
            k = i;
        }
    }
    if eigen.eigenvalues[k] <= cfg.eps_spread {
        // No usable spread direction: all points (near-)coincident.
        let radius = points
            .iter()
            .map(|p| (p - center).norm())
            .fold(0.0, f64::max);
        return Ok(Capsule::sphere(center, radius));
    }

    // Unit eigenvector of the largest eigenvalue.
    let dir: Point = eigen.eigenvectors.column(k).into_owned();
    let (imin, imax) = extreme_points_along_direction(&dir, points);
    // Endpoints are the extreme projections onto the centroid line along dir.
    let p0 = center + dir * (points[imin] - center).dot(&dir);
    let p1 = center + dir * (points[imax] - center).dot(&dir);

    // Infinite-line distance, not segment distance: every point's axial
    // projection lies between the extremes, so line coverage implies capsule
    // coverage.
    let radius = points
        .iter()
        .map(|p| distance_point_to_line(p, &p0, &dir))
        .fold(0.0, f64::max)
        .max(0.0);

    Ok(Capsule::new(p0, p1, radius))
}
