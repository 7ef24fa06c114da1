//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) or explicit body list and produces
//! the runtime bundle `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the gravity law, warp field, sampling grid and time-acceleration clock
//!
//! A driver (renderer, CLI) owns the `Scenario`, calls one of the advance
//! methods once per frame, then reads body states and warp samples.

use log::{info, trace};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::clock::TimeAcceleration;
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::field::{GridSample, SpacetimeGrid, WarpField};
use crate::simulation::forces::RelativisticGravity;
use crate::simulation::integrator::step_system;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyState, NVec2, System};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub grid: SpacetimeGrid,
    pub time_acceleration: TimeAcceleration,
    system: System,
    gravity: RelativisticGravity,
    field: WarpField,
}

impl Scenario {
    /// Create a simulation from an ordered body list. Body 0 is the anchor.
    /// Fails on an empty list, any non-positive mass or radius, or invalid
    /// parameters.
    pub fn new(
        bodies: &[BodyConfig],
        parameters: Parameters,
        engine: Engine,
    ) -> Result<Self, SimError> {
        parameters.validate()?;
        engine.validate()?;

        if bodies.is_empty() {
            return Err(SimError::NoBodies);
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| {
                Body::new(
                    i,
                    NVec2::new(bc.x, bc.y),
                    NVec2::new(bc.vx, bc.vy),
                    bc.mass,
                    bc.radius,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        let gravity = RelativisticGravity {
            G: parameters.G,
            c: parameters.c,
        };
        let field = WarpField {
            scale: parameters.warp_scale,
        };
        let time_acceleration = TimeAcceleration::new(engine.time_acceleration_max);

        info!(
            "scenario built: {} bodies, integrator {:?}, fixed anchor {}",
            system.bodies.len(),
            engine.integrator,
            engine.fixed_anchor
        );

        Ok(Self {
            engine,
            parameters,
            grid: SpacetimeGrid::default(),
            time_acceleration,
            system,
            gravity,
            field,
        })
    }

    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            G: p_cfg.G,
            c: p_cfg.c,
            warp_scale: p_cfg.warp_scale,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine::from_config(&cfg.engine)?;

        let extent = cfg.grid.extent;
        if !(extent.is_finite() && extent > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "grid extent must be positive and finite, got {extent}"
            )));
        }

        let mut scenario = Self::new(&cfg.bodies, parameters, engine)?;
        scenario.grid = SpacetimeGrid {
            half_lines: cfg.grid.half_lines,
            extent: cfg.grid.extent,
        };
        Ok(scenario)
    }

    /// Advance every integrated body by `dt` with the configured scheme.
    /// `dt == 0` leaves the state untouched.
    pub fn advance(&mut self, dt: f64) {
        let accel = self.gravity.bound_to(self.anchor_mass());
        step_system(
            &mut self.system,
            &accel,
            dt,
            self.engine.integrator,
            self.engine.fixed_anchor,
        );
        trace!("advanced by {dt}, t = {}", self.system.t);
    }

    /// Advance by the fixed physics tick `h0`
    pub fn tick(&mut self) {
        self.advance(self.parameters.h0);
    }

    /// Advance by wall-clock `frame_dt` scaled by the time-acceleration factor
    pub fn advance_realtime(&mut self, frame_dt: f64) {
        let dt = self.time_acceleration.scale(frame_dt);
        self.advance(dt);
    }

    pub fn set_time_acceleration(&mut self, factor: f64) {
        self.time_acceleration.set(factor);
    }

    pub fn anchor_mass(&self) -> f64 {
        self.system.anchor().mass()
    }

    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn gravity(&self) -> &RelativisticGravity {
        &self.gravity
    }

    /// Snapshot of every body for rendering
    pub fn body_states(&self) -> Vec<BodyState> {
        self.system.bodies.iter().map(Body::state).collect()
    }

    /// Warp of the field at `(x, y)` from the current body positions
    pub fn warp_at(&self, x: f64, y: f64) -> f64 {
        self.field.warp_at(&NVec2::new(x, y), &self.system.bodies)
    }

    /// Warp at every point of the configured grid
    pub fn sample_grid(&self) -> Vec<GridSample> {
        self.grid.sample(&self.system.bodies, &self.field)
    }
}
