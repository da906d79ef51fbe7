//! Fit a bounding capsule to a random anisotropic cloud and report the
//! numbers an optimizer would start from.
//!
//! Purpose
//! - Provide a reproducible end-to-end probe of the fitting pipeline: draw a
//!   cloud, reduce it to its hull, fit the initial capsule, and print the
//!   capsule, its volume, and the worst constraint value.
//! - The replay token makes every run print the same cloud and fit.

use std::time::Instant;

use capsule_fit::prelude::*;

fn main() {
    let cfg = CloudCfg {
        point_count: PointCount::Fixed(2000),
        half_axes: [6.0, 1.5, 1.0],
        ..CloudCfg::default()
    };
    let cloud = draw_cloud(cfg, ReplayToken::new(2024, 0));

    let hull_start = Instant::now();
    let hull = convex_hull_from_points(&cloud).expect("hull of a non-degenerate cloud");
    let hull_elapsed = hull_start.elapsed().as_secs_f64() * 1e3;

    let fit_start = Instant::now();
    let problem =
        FitProblem::from_polyhedra(&[cloud.clone()], FitCfg::default()).expect("fit succeeds");
    let fit_elapsed = fit_start.elapsed().as_secs_f64() * 1e3;

    let capsule = problem.initial_capsule();
    let worst = problem
        .constraints
        .iter()
        .map(|c| c.evaluate(&problem.initial))
        .fold(f64::NEG_INFINITY, f64::max);

    println!("points={} hull_vertices={}", cloud.len(), hull.len());
    println!(
        "p0=({:.4}, {:.4}, {:.4}) p1=({:.4}, {:.4}, {:.4}) radius={:.4}",
        capsule.p0.x, capsule.p0.y, capsule.p0.z, capsule.p1.x, capsule.p1.y, capsule.p1.z,
        capsule.radius
    );
    println!(
        "volume={:.6} worst_constraint={:.3e} (feasible iff <= 0)",
        problem.volume.evaluate(&problem.initial),
        worst
    );
    println!("hull_time_ms={hull_elapsed:.3}");
    println!("fit_time_ms={fit_elapsed:.3}");
}
