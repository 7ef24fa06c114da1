use std::time::Instant;

use crate::configuration::config::{BodyConfig, IntegratorConfig};
use crate::simulation::engine::Engine;
use crate::simulation::field::SpacetimeGrid;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::circular_speed;

/// Helper: an anchor at the origin with `n` bodies on circular orbits
/// in normalized units (G = M = 1)
fn ring_bodies(n: usize) -> Vec<BodyConfig> {
    let mut bodies = Vec::with_capacity(n + 1);
    bodies.push(BodyConfig { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0, mass: 1.0, radius: 0.1 });

    for i in 0..n {
        let i_f = i as f64;
        // deterministic radii and phases, no rand needed
        let r = 0.3 + 0.6 * (i_f * 0.37).sin().abs();
        let phase = i_f * 0.13;
        let v = circular_speed(1.0, 1.0, r);

        bodies.push(BodyConfig {
            x: r * phase.cos(),
            y: r * phase.sin(),
            vx: -v * phase.sin(),
            vy: v * phase.cos(),
            mass: 1e-3,
            radius: 0.01,
        });
    }
    bodies
}

/// Helper: normalized parameters so orbits stay bounded
fn make_params() -> Parameters {
    Parameters {
        h0: 1e-3,
        G: 1.0,
        c: 1e4,
        warp_scale: 0.02,
    }
}

/// Time one step of each integrator for growing body counts
pub fn bench_integrators() {
    let schemes = [
        IntegratorConfig::Rk4Frozen,
        IntegratorConfig::Rk4Staged,
        IntegratorConfig::SemiImplicitEuler,
    ];
    let ns = [10, 100, 1000, 10000];
    let steps = 100;

    println!("N,scheme,us_per_step");

    for n in ns {
        let bodies = ring_bodies(n);

        for scheme in schemes {
            let engine = Engine { integrator: scheme, ..Engine::default() };
            let mut scenario = match Scenario::new(&bodies, make_params(), engine) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("bench_integrators: {e}");
                    return;
                }
            };

            // Warm up
            scenario.tick();

            let t0 = Instant::now();
            for _ in 0..steps {
                scenario.tick();
            }
            let us = t0.elapsed().as_secs_f64() * 1e6 / steps as f64;

            println!("{},{:?},{:.3}", n, scheme, us);
        }
    }
}

/// Time a full grid sample for growing lattice resolutions
pub fn bench_warp_grid() {
    let bodies = ring_bodies(8);
    let mut scenario = match Scenario::new(&bodies, make_params(), Engine::default()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("bench_warp_grid: {e}");
            return;
        }
    };

    println!("points,ms_per_grid");

    for half_lines in [10, 20, 40, 80, 160] {
        scenario.grid = SpacetimeGrid { half_lines, extent: 1.0 };

        // Warm up
        let _ = scenario.sample_grid();

        let t0 = Instant::now();
        let samples = scenario.sample_grid();
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6}", samples.len(), ms);
    }
}
