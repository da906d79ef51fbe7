//! Polyhedron merge and bounding orchestration.
//!
//! Merging is order-preserving concatenation of vertex sets; the hull reducer
//! then throws away everything that cannot touch the bounding capsule, and the
//! estimator runs on hull vertices only. One distance constraint per hull
//! vertex plus the volume objective is the whole optimization problem.

use crate::func::{capsule_to_params, DistanceCapsulePoint, Params, Volume};
use crate::geom3::{convex_hull_from_points, Capsule, FitCfg, Polyhedron};

use super::estimator::{capsule_from_points, FitError};

/// Union of all polyhedron vertex sets, input order preserved.
pub fn merge_polyhedra(polyhedra: &[Polyhedron]) -> Polyhedron {
    let mut out = Polyhedron::new();
    for poly in polyhedra {
        out.extend_from_slice(poly);
    }
    out
}

/// Initial bounding capsule over the union of `polyhedra`.
///
/// The estimator only ever sees hull vertices; interior points cannot move
/// the bounding fit and would only add optimizer constraints.
pub fn compute_bounding_capsule(
    polyhedra: &[Polyhedron],
    cfg: FitCfg,
) -> Result<Capsule, FitError> {
    let merged = merge_polyhedra(polyhedra);
    if merged.is_empty() {
        return Err(FitError::EmptyPointSet);
    }
    let hull = convex_hull_from_points(&merged).map_err(FitError::Hull)?;
    capsule_from_points(&hull, cfg)
}

/// Convex hull over the union of `polyhedra`, as a single-element vector
/// (the reduced stand-in for the whole input collection).
pub fn compute_convex_polyhedron(polyhedra: &[Polyhedron]) -> Result<Vec<Polyhedron>, FitError> {
    let merged = merge_polyhedra(polyhedra);
    if merged.is_empty() {
        return Err(FitError::EmptyPointSet);
    }
    let hull = convex_hull_from_points(&merged).map_err(FitError::Hull)?;
    Ok(vec![hull])
}

/// Ready-to-solve fitting problem: minimize `volume` subject to
/// `constraints[i].evaluate(params) <= 0` for every hull vertex, starting
/// from `initial`. Hand this to any optimizer speaking the
/// `DifferentiableFn` contract; this crate never sees solver types.
pub struct FitProblem {
    pub initial: Params,
    pub volume: Volume,
    pub constraints: Vec<DistanceCapsulePoint>,
}

impl FitProblem {
    /// Merge, reduce, estimate, and package.
    pub fn from_polyhedra(polyhedra: &[Polyhedron], cfg: FitCfg) -> Result<Self, FitError> {
        let merged = merge_polyhedra(polyhedra);
        if merged.is_empty() {
            return Err(FitError::EmptyPointSet);
        }
        let hull = convex_hull_from_points(&merged).map_err(FitError::Hull)?;
        let capsule = capsule_from_points(&hull, cfg)?;
        let constraints = hull
            .iter()
            .map(|p| DistanceCapsulePoint::new(*p, cfg))
            .collect();
        Ok(Self {
            initial: capsule_to_params(&capsule),
            volume: Volume,
            constraints,
        })
    }

    /// The initial capsule the parameters encode.
    pub fn initial_capsule(&self) -> Capsule {
        crate::func::params_to_capsule(&self.initial)
    }
}
