//! Signed distance from a capsule to a fixed point, with analytic gradient.
//!
//! The value is `|point - q| - radius` where `q` is the clamped segment
//! projection of the point; negative means the point is inside the capsule.
//! Used as an inequality constraint (`distance <= 0`) per hull vertex.

use crate::geom3::{segment_parameter, FitCfg, Point};

use super::params::{params_to_capsule, Gradient, Params};
use super::DifferentiableFn;

/// Distance-to-point constraint function; the target point is fixed at
/// construction and the parameter vector varies under the optimizer.
#[derive(Clone, Copy, Debug)]
pub struct DistanceCapsulePoint {
    point: Point,
    cfg: FitCfg,
}

impl DistanceCapsulePoint {
    #[inline]
    pub fn new(point: Point, cfg: FitCfg) -> Self {
        Self { point, cfg }
    }

    /// The fixed target point.
    #[inline]
    pub fn point(&self) -> &Point {
        &self.point
    }
}

impl DifferentiableFn for DistanceCapsulePoint {
    fn evaluate(&self, params: &Params) -> f64 {
        params_to_capsule(params).distance_to_point(&self.point)
    }

    /// Analytic partials.
    ///
    /// `d/d radius = -1` always. The endpoint partials follow the projection
    /// regime: the clamped parameter `tc` splits `-u` (`u` the unit vector
    /// from projection to point) as `(1 - tc)` on `p0` and `tc` on `p1`. In
    /// the interior regime `t` itself depends on the endpoints, but `t`
    /// minimizes the distance there, so the `dt` terms vanish and holding `t`
    /// fixed gives the exact derivative. The clamped regimes (`tc = 0` or
    /// `1`) drop out of the same expression.
    fn gradient(&self, params: &Params, _function_index: usize) -> Gradient {
        let c = params_to_capsule(params);
        let tc = segment_parameter(&self.point, &c.p0, &c.p1).clamp(0.0, 1.0);
        let q = c.p0 + (c.p1 - c.p0) * tc;
        let diff = self.point - q;
        let dist = diff.norm();

        let mut g = Gradient::zeros();
        g[6] = -1.0;
        if dist <= self.cfg.eps_axis {
            // Point on the axis: |point - q| is not differentiable there.
            // Report the zero sub-gradient for the endpoints, never NaN.
            return g;
        }
        let u = diff / dist;
        let g0 = -u * (1.0 - tc);
        let g1 = -u * tc;
        for i in 0..3 {
            g[i] = g0[i];
            g[i + 3] = g1[i];
        }
        g
    }
}
