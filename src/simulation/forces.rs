//! Acceleration model for the warp simulation
//!
//! Gravity here is single-center: every integrated body falls toward a fixed
//! point mass at the coordinate origin (the anchor body's mass). Bodies do
//! not attract each other. Initial orbital velocities in the scenarios are
//! tuned against exactly this law, including the relativistic correction.

use crate::simulation::states::NVec2;

/// Below this radial distance the acceleration is defined as zero
pub const SINGULARITY_EPS: f64 = 1e-10;

/// Trait for acceleration sources bound to a fixed center
/// Implementations return the instantaneous acceleration at `x`
pub trait Acceleration {
    fn acceleration(&self, x: &NVec2) -> NVec2;
}

/// Newtonian central gravity with a `1 + 3GM/(c^2 r)` correction factor
/// approximating general-relativistic precession
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct RelativisticGravity {
    pub G: f64, // gravitational constant
    pub c: f64, // speed of light
}

impl RelativisticGravity {
    /// Acceleration at `x` (relative to the origin) due to `central_mass` at the origin
    pub fn acceleration_at(&self, x: &NVec2, central_mass: f64) -> NVec2 {
        // Radial distance from the center
        let r = x.norm();
        if r < SINGULARITY_EPS {
            return NVec2::zeros();
        }

        let gm = self.G * central_mass;

        // -GM / r^3, the Newtonian factor applied to the position vector
        let factor = -gm / (r * r * r);

        // 1 + 3GM / (c^2 r)
        let rel_correction = 1.0 + 3.0 * gm / (self.c * self.c * r);

        x * (factor * rel_correction)
    }

    /// Fix the central mass, giving an [`Acceleration`] for the integrators
    pub fn bound_to(self, central_mass: f64) -> CentralGravity {
        CentralGravity {
            law: self,
            central_mass,
        }
    }
}

/// [`RelativisticGravity`] with its central mass fixed
#[derive(Debug, Clone, Copy)]
pub struct CentralGravity {
    pub law: RelativisticGravity,
    pub central_mass: f64,
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, x: &NVec2) -> NVec2 {
        self.law.acceleration_at(x, self.central_mass)
    }
}
