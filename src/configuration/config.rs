//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice, anchor handling, time acceleration
//! - [`ParametersConfig`] – fixed tick and physical constants
//! - [`GridConfig`]       – lattice the warp field is sampled on
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The Sun/Earth scenario, with every optional field spelled out:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4_frozen"    # or "rk4_staged", "euler"
//!   fixed_anchor: true          # body 0 is never integrated
//!   time_acceleration_max: 100.0
//!
//! parameters:
//!   h0: 0.0005                  # fixed step size
//!   G: 6.6743e-11               # gravitational constant
//!   c: 3.0e8                    # speed of light
//!   warp_scale: 0.02            # scale k of the warp field
//!
//! grid:
//!   half_lines: 20
//!   extent: 1.0
//!
//! bodies:
//!   - { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0, mass: 1.989e30, radius: 0.2 }
//!   - { x: 0.5, y: 0.0, vx: 0.0, vy: 0.3, mass: 5.972e24, radius: 0.1 }
//! ```
//!
//! Only `bodies` is required. The engine maps this configuration into its
//! runtime types when a `Scenario` is built.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::clock::DEFAULT_MAX_TIME_ACCELERATION;
use crate::simulation::params::{C_DEFAULT, DEFAULT_TIME_STEP, DEFAULT_WARP_SCALE, G_SI};

/// Which integrator the engine steps bodies with
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "rk4_frozen")] // RK4 with the acceleration held at the stored position for all stages
    Rk4Frozen,

    #[serde(rename = "rk4_staged")] // Classical RK4, acceleration re-evaluated at each stage position
    Rk4Staged,

    #[serde(rename = "euler")] // Semi-implicit Euler, meant for variable real-time steps
    SemiImplicitEuler,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // Time integrator used for advancing the bodies
    pub fixed_anchor: bool, // `true` - body 0 is skipped by the integrator
    pub time_acceleration_max: f64, // Upper clamp for the real-time multiplier
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::default(),
            fixed_anchor: true,
            time_acceleration_max: DEFAULT_MAX_TIME_ACCELERATION,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub h0: f64,         // fixed time step size
    pub G: f64,          // gravitational constant
    pub c: f64,          // speed of light
    pub warp_scale: f64, // warp field scale
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            h0: DEFAULT_TIME_STEP,
            G: G_SI,
            c: C_DEFAULT,
            warp_scale: DEFAULT_WARP_SCALE,
        }
    }
}

/// Lattice for sampling the warp field
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GridConfig {
    pub half_lines: u32, // lines on each side of the axes
    pub extent: f64,     // half-width of the square lattice
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            half_lines: 20,
            extent: 1.0,
        }
    }
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BodyConfig {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    pub mass: f64,   // must be > 0
    pub radius: f64, // visual radius, must be > 0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub grid: GridConfig,
    pub bodies: Vec<BodyConfig>, // index 0 is the anchor body
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg = serde_yaml::from_str(text).context("failed to parse scenario YAML")?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        Ok(cfg)
    }
}
