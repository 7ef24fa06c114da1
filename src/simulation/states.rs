//! Core state types for the warp simulation.
//!
//! Defines the body/system structs using `NVec2`:
//! - `Body`      kinematic state plus immutable mass and visual radius
//! - `System`    ordered body list and current simulation time `t`
//! - `BodyState` flat read-only snapshot handed to renderers
//!
//! Index 0 of `System::bodies` is the anchor body: the fixed gravitational
//! center whose mass every other body orbits.

use nalgebra::Vector2;

use crate::simulation::error::SimError;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    m: f64, // mass, > 0
    radius: f64, // visual radius, > 0
}

impl Body {
    /// Build a body, rejecting non-positive or non-finite mass and radius.
    /// `index` is only used to label the error.
    pub fn new(index: usize, x: NVec2, v: NVec2, m: f64, radius: f64) -> Result<Self, SimError> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass { index, mass: m });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius { index, radius });
        }
        Ok(Self { x, v, m, radius })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance from the coordinate origin
    pub fn orbital_radius(&self) -> f64 {
        self.x.norm()
    }

    /// Newtonian specific orbital energy `v^2/2 - GM/r` about a central mass at the origin
    #[allow(non_snake_case)]
    pub fn specific_energy(&self, G: f64, central_mass: f64) -> f64 {
        0.5 * self.v.norm_squared() - G * central_mass / self.orbital_radius()
    }

    pub fn state(&self) -> BodyState {
        BodyState {
            x: self.x.x,
            y: self.x.y,
            vx: self.v.x,
            vy: self.v.y,
            mass: self.m,
            radius: self.radius,
        }
    }
}

/// Speed of a circular Newtonian orbit of radius `r` around mass `central_mass`
#[allow(non_snake_case)]
pub fn circular_speed(G: f64, central_mass: f64, r: f64) -> f64 {
    (G * central_mass / r).sqrt()
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // index 0 is the anchor
    pub t: f64, // time
}

impl System {
    pub fn anchor(&self) -> &Body {
        &self.bodies[0]
    }
}

/// Read-only snapshot of one body, as consumed by a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub mass: f64,
    pub radius: f64,
}
