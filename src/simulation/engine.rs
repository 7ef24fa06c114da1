//! High-level runtime engine settings
//!
//! Selects the integrator, whether the anchor body is held fixed, and the
//! time-acceleration ceiling used when building and running a `Scenario`

use crate::configuration::config::{EngineConfig, IntegratorConfig};
use crate::simulation::clock::{DEFAULT_MAX_TIME_ACCELERATION, MIN_TIME_ACCELERATION};
use crate::simulation::error::SimError;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // rk4_frozen, rk4_staged or euler
    pub fixed_anchor: bool, // true = body 0 is not integrated
    pub time_acceleration_max: f64, // >= 1
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::default(),
            fixed_anchor: true,
            time_acceleration_max: DEFAULT_MAX_TIME_ACCELERATION,
        }
    }
}

impl Engine {
    pub fn from_config(cfg: &EngineConfig) -> Result<Self, SimError> {
        let engine = Self {
            integrator: cfg.integrator,
            fixed_anchor: cfg.fixed_anchor,
            time_acceleration_max: cfg.time_acceleration_max,
        };
        engine.validate()?;
        Ok(engine)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let max = self.time_acceleration_max;
        if !(max.is_finite() && max >= MIN_TIME_ACCELERATION) {
            return Err(SimError::InvalidParameter(format!(
                "time_acceleration_max must be finite and >= 1, got {max}"
            )));
        }
        Ok(())
    }
}
