//! Differentiable value/gradient functions over the 7-parameter capsule
//! encoding.
//!
//! Purpose
//! - Give an external constrained optimizer exactly what it needs and nothing
//!   more: a scalar `evaluate` and an analytic `gradient` per function, both
//!   pure in the parameter vector. The two concrete functions are the capsule
//!   volume (objective) and the signed distance to a fixed point (one
//!   inequality constraint per hull vertex, `distance <= 0`).
//!
//! Why a trait instead of a function hierarchy
//! - The original design exposes these as subclasses of a differentiable
//!   function base class; a single capability trait (`DifferentiableFn`) with
//!   two implementors carries the same contract without inheritance, and
//!   `dyn DifferentiableFn` slots straight into any solver wrapper.
//!
//! Code cross-refs: `params::{capsule_to_params, params_to_capsule}`,
//! `distance::DistanceCapsulePoint`, `volume::Volume`.

mod distance;
mod params;
mod volume;

pub use distance::DistanceCapsulePoint;
pub use params::{capsule_to_params, params_to_capsule, Gradient, Params};
pub use volume::Volume;

/// Value + analytic gradient of a scalar function of the capsule parameters.
///
/// `function_index` distinguishes outputs of multi-output functions; both
/// functions here have a single output, so it is accepted (for interface
/// compatibility with multi-output solvers) and ignored.
pub trait DifferentiableFn {
    fn evaluate(&self, params: &Params) -> f64;
    fn gradient(&self, params: &Params, function_index: usize) -> Gradient;
}
