//! Random 3D point clouds (ellipsoidal with replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of anisotropic clouds for tests,
//!   benchmarks, and demos. Clouds are uniform in an axis-scaled ball with an
//!   optional random rotation, so PCA has a well-separated spread direction
//!   to find when the half-axes differ.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nalgebra::{Rotation3, Unit, Vector3};

use super::types::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.max(1),
            PointCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Ellipsoidal cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub point_count: PointCount,
    /// Half-axes of the sampling ellipsoid before rotation/translation.
    pub half_axes: [f64; 3],
    /// Cloud center.
    pub center: [f64; 3],
    /// Apply a random rotation so principal axes are not axis-aligned?
    pub random_rotation: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            point_count: PointCount::Fixed(64),
            half_axes: [4.0, 1.0, 0.5],
            center: [0.0, 0.0, 0.0],
            random_rotation: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a deterministic cloud: uniform in the unit ball, scaled by the
/// half-axes, optionally rotated, then translated to the center.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.point_count.sample(&mut rng);
    let rot = if cfg.random_rotation {
        let axis = unit_direction(&mut rng);
        let angle = rng.gen::<f64>() * std::f64::consts::TAU;
        Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle)
    } else {
        Rotation3::identity()
    };
    let center = Point::new(cfg.center[0], cfg.center[1], cfg.center[2]);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let u = unit_ball(&mut rng);
        let scaled = Point::new(
            u.x * cfg.half_axes[0],
            u.y * cfg.half_axes[1],
            u.z * cfg.half_axes[2],
        );
        out.push(rot * scaled + center);
    }
    out
}

/// Uniform point in the closed unit ball (rejection sampling).
fn unit_ball<R: Rng>(rng: &mut R) -> Vector3<f64> {
    loop {
        let v = Vector3::new(
            rng.gen::<f64>() * 2.0 - 1.0,
            rng.gen::<f64>() * 2.0 - 1.0,
            rng.gen::<f64>() * 2.0 - 1.0,
        );
        if v.norm_squared() <= 1.0 {
            return v;
        }
    }
}

/// Uniform direction on the unit sphere (rejection + normalize).
fn unit_direction<R: Rng>(rng: &mut R) -> Vector3<f64> {
    loop {
        let v = unit_ball(rng);
        let n = v.norm();
        if n > 1e-6 {
            return v / n;
        }
    }
}
