//! Time integrators for single bodies in a central field
//!
//! Provides a fixed-step fourth-order Runge–Kutta scheme in two variants
//! (see [`Rk4Mode`]) and a semi-implicit Euler scheme for variable,
//! real-time steps. Every scheme treats `dt == 0` as an identity step.

use super::forces::Acceleration;
use super::states::{Body, NVec2, System};
use crate::configuration::config::IntegratorConfig;

/// Where the RK4 stages evaluate the acceleration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rk4Mode {
    /// All four stages use the acceleration at the body's stored position.
    /// The force field is frozen for the step, which reduces the position
    /// update to `x + v dt + a dt^2 / 2` and the velocity update to `v + a dt`.
    Frozen,
    /// Classical RK4: each stage evaluates the acceleration at its own
    /// advanced position
    Staged,
}

/// Advance one body by `dt` with fourth-order Runge–Kutta
/// - `k*x` are position increments, `k*v` velocity increments
pub fn rk4_step(body: &mut Body, accel: &dyn Acceleration, dt: f64, mode: Rk4Mode) {
    if dt == 0.0 {
        return;
    }

    let x = body.x;
    let v = body.v;

    // Stage acceleration: either at the stage position or pinned to x
    let stage_accel = |offset: NVec2| -> NVec2 {
        match mode {
            Rk4Mode::Frozen => accel.acceleration(&x),
            Rk4Mode::Staged => accel.acceleration(&(x + offset)),
        }
    };

    // Stage 1 at x_n
    let k1x = v * dt;
    let k1v = stage_accel(NVec2::zeros()) * dt;

    // Stage 2 at the midpoint predicted by stage 1
    let k2x = (v + 0.5 * k1v) * dt;
    let k2v = stage_accel(0.5 * k1x) * dt;

    // Stage 3 at the midpoint predicted by stage 2
    let k3x = (v + 0.5 * k2v) * dt;
    let k3v = stage_accel(0.5 * k2x) * dt;

    // Stage 4 at the end point predicted by stage 3
    let k4x = (v + k3v) * dt;
    let k4v = stage_accel(k3x) * dt;

    // x_n+1 = x_n + (k1 + 2k2 + 2k3 + k4) / 6, likewise for v
    body.x += (k1x + 2.0 * k2x + 2.0 * k3x + k4x) / 6.0;
    body.v += (k1v + 2.0 * k2v + 2.0 * k3v + k4v) / 6.0;
}

/// Advance one body by `dt` with semi-implicit (symplectic) Euler:
/// kick the velocity with a(x_n), then drift with the new velocity
pub fn semi_implicit_euler_step(body: &mut Body, accel: &dyn Acceleration, dt: f64) {
    if dt == 0.0 {
        return;
    }

    // v_n+1 = v_n + a(x_n) dt
    let a = accel.acceleration(&body.x);
    body.v += a * dt;

    // x_n+1 = x_n + v_n+1 dt
    body.x += body.v * dt;
}

/// Advance one body with the configured scheme
pub fn step_body(body: &mut Body, accel: &dyn Acceleration, dt: f64, scheme: IntegratorConfig) {
    match scheme {
        IntegratorConfig::Rk4Frozen => rk4_step(body, accel, dt, Rk4Mode::Frozen),
        IntegratorConfig::Rk4Staged => rk4_step(body, accel, dt, Rk4Mode::Staged),
        IntegratorConfig::SemiImplicitEuler => semi_implicit_euler_step(body, accel, dt),
    }
}

/// Advance every integrated body of `sys` by `dt` and bump `sys.t`
/// - with `skip_anchor`, body 0 is left untouched
/// - bodies are independent of each other, so update order does not matter
pub fn step_system(
    sys: &mut System,
    accel: &dyn Acceleration,
    dt: f64,
    scheme: IntegratorConfig,
    skip_anchor: bool,
) {
    if dt == 0.0 {
        return;
    }

    let first = usize::from(skip_anchor);
    for body in sys.bodies.iter_mut().skip(first) {
        step_body(body, accel, dt, scheme);
    }

    sys.t += dt;
}
