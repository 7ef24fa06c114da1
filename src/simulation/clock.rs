//! User-controlled time acceleration for real-time stepping
//!
//! The factor multiplies wall-clock frame time before it reaches the
//! integrator and always stays within `[1, max]`.

use log::debug;

pub const MIN_TIME_ACCELERATION: f64 = 1.0;
pub const DEFAULT_MAX_TIME_ACCELERATION: f64 = 100.0;

#[derive(Debug, Clone, Copy)]
pub struct TimeAcceleration {
    factor: f64,
    max: f64,
}

impl Default for TimeAcceleration {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TIME_ACCELERATION)
    }
}

impl TimeAcceleration {
    /// Start at 1x; `max` below 1 is raised to 1
    pub fn new(max: f64) -> Self {
        Self {
            factor: MIN_TIME_ACCELERATION,
            max: max.max(MIN_TIME_ACCELERATION),
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Set the factor, clamped to `[1, max]`. NaN resets to 1x.
    pub fn set(&mut self, factor: f64) {
        self.factor = if factor.is_nan() {
            MIN_TIME_ACCELERATION
        } else {
            factor.clamp(MIN_TIME_ACCELERATION, self.max)
        };
        debug!("time acceleration set to {:.2}x", self.factor);
    }

    pub fn speed_up(&mut self) {
        self.set(self.factor * 2.0);
    }

    pub fn slow_down(&mut self) {
        self.set(self.factor / 2.0);
    }

    /// Simulation time corresponding to `frame_dt` seconds of wall clock
    pub fn scale(&self, frame_dt: f64) -> f64 {
        frame_dt * self.factor
    }
}
