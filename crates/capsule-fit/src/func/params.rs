//! Bidirectional mapping between a capsule and the 7-scalar parameter vector
//! `[p0.x, p0.y, p0.z, p1.x, p1.y, p1.z, radius]` exchanged with the
//! optimizer. The two directions are exact inverses (bit-exact round-trip).

use nalgebra::SVector;

use crate::geom3::{Capsule, Point};

/// Optimizer-facing parameter vector.
pub type Params = SVector<f64, 7>;

/// Partial derivatives, one per parameter component.
pub type Gradient = SVector<f64, 7>;

/// Pack a capsule into solver parameters.
#[inline]
pub fn capsule_to_params(c: &Capsule) -> Params {
    Params::from_column_slice(&[
        c.p0.x, c.p0.y, c.p0.z, c.p1.x, c.p1.y, c.p1.z, c.radius,
    ])
}

/// Unpack solver parameters into a capsule.
#[inline]
pub fn params_to_capsule(params: &Params) -> Capsule {
    Capsule {
        p0: Point::new(params[0], params[1], params[2]),
        p1: Point::new(params[3], params[4], params[5]),
        radius: params[6],
    }
}
