use warpsim::{Scenario, ScenarioConfig};
use warpsim::{bench_integrators, bench_warp_grid};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "sun_earth.yaml")]
    file_name: String,

    /// Number of frames to run
    #[arg(long, default_value_t = 1000)]
    frames: usize,

    /// Run the real-time path with this wall-clock frame delta instead of the fixed tick
    #[arg(long)]
    realtime_dt: Option<f64>,

    /// Time-acceleration factor for the real-time path, clamped to the scenario maximum
    #[arg(long, default_value_t = 1.0)]
    time_accel: f64,

    /// Report the warp range over the sampling grid after the run
    #[arg(long)]
    grid: bool,

    /// Run the benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::from_yaml_file(&config_path)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_integrators();
        bench_warp_grid();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg)?;
    scenario.set_time_acceleration(args.time_accel);

    for _ in 0..args.frames {
        match args.realtime_dt {
            Some(frame_dt) => scenario.advance_realtime(frame_dt),
            None => scenario.tick(),
        }
    }

    info!("ran {} frames, t = {:.6}", args.frames, scenario.time());
    for (i, b) in scenario.body_states().iter().enumerate() {
        info!(
            "body {i}: x = ({:.6}, {:.6}) v = ({:.6}, {:.6}) m = {:e} r = {}",
            b.x, b.y, b.vx, b.vy, b.mass, b.radius
        );
    }

    if args.grid {
        let samples = scenario.sample_grid();
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| (lo.min(s.warp), hi.max(s.warp)));
        info!("grid: {} samples, warp in [{min:.6e}, {max:.6e}]", samples.len());
    }

    Ok(())
}
