//! Capsule volume as a differentiable function of the parameter vector; the
//! minimization objective of the fit.

use std::f64::consts::PI;

use super::params::{params_to_capsule, Gradient, Params};
use super::DifferentiableFn;

/// Capsule volume objective `pi r^2 L + (4/3) pi r^3`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Volume;

impl DifferentiableFn for Volume {
    fn evaluate(&self, params: &Params) -> f64 {
        params_to_capsule(params).volume()
    }

    /// `dV/dr = 2 pi r L + 4 pi r^2`; the endpoint partials scale the unit
    /// axis direction by `pi r^2`. A zero-length axis has no defined axis
    /// direction, but the volume is continuous there, so both endpoint
    /// partials fall back to zero.
    fn gradient(&self, params: &Params, _function_index: usize) -> Gradient {
        let c = params_to_capsule(params);
        let axis = c.p1 - c.p0;
        let len = axis.norm();
        let r = c.radius;

        let mut g = Gradient::zeros();
        g[6] = 2.0 * PI * r * len + 4.0 * PI * r * r;
        if len > 0.0 {
            let d = axis / len;
            let coeff = PI * r * r;
            for i in 0..3 {
                g[i] = -coeff * d[i];
                g[i + 3] = coeff * d[i];
            }
        }
        g
    }
}
