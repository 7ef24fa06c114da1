//! Errors raised while setting up a simulation.
//!
//! Stepping and field sampling never fail; only construction does.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("body {index}: mass must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("body {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("scenario has no bodies, at least an anchor body is required")]
    NoBodies,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
