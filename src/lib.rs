pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyState, System, NVec2, circular_speed};
pub use simulation::forces::{Acceleration, RelativisticGravity, CentralGravity, SINGULARITY_EPS};
pub use simulation::integrator::{rk4_step, semi_implicit_euler_step, step_body, step_system, Rk4Mode};
pub use simulation::field::{WarpField, SpacetimeGrid, GridSample, EXCLUSION_RADIUS};
pub use simulation::clock::TimeAcceleration;
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::error::SimError;
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, GridConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_integrators, bench_warp_grid};
