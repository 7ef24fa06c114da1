//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed physics tick `h0`,
//! - gravitational constant and speed of light (`G`, `c`),
//! - scale of the warp field (`warp_scale`)
//!
//! These are fixed once a `Scenario` is built; nothing mutates them per call.

use crate::simulation::error::SimError;

/// Gravitational constant used by the default scenario (SI)
pub const G_SI: f64 = 6.67430e-11;
/// Speed of light used by the default scenario
pub const C_DEFAULT: f64 = 3e8;
/// Fixed tick applied by `Scenario::tick`
pub const DEFAULT_TIME_STEP: f64 = 0.0005;
/// Scale `k` of the warp field
pub const DEFAULT_WARP_SCALE: f64 = 0.02;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size
    pub G: f64, // gravitational constant
    pub c: f64, // speed of light
    pub warp_scale: f64, // warp field scale k
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            h0: DEFAULT_TIME_STEP,
            G: G_SI,
            c: C_DEFAULT,
            warp_scale: DEFAULT_WARP_SCALE,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimError> {
        let checks = [
            ("h0", self.h0),
            ("G", self.G),
            ("c", self.c),
            ("warp_scale", self.warp_scale),
        ];
        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameter(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
