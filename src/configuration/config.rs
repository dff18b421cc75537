//! Configuration types for loading scenes from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene to run. A scenario consists of:
//!
//! - [`EngineConfig`]     – which scene to run and which integrator to use
//! - [`ParametersConfig`] – physical constants for both models
//! - [`SamplingConfig`]   – grid spacing and trace-history settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   scene: "sliding_pendulum"  # or "potential_well" / "well_potential_plot"
//!   integrator: "rk4"
//!
//! parameters:
//!   g: 9.8                     # gravitational acceleration
//!   l: 1.0                     # pendulum rod length
//!   m1: 1.0                    # sliding pivot mass
//!   m2: 1.0                    # bob mass
//!   m: 1.0                     # well particle mass
//!   a: 1.0                     # well half-width
//!   v0: 1.0                    # well depth scale V_0
//!   energy: 1.0                # well total energy E
//!
//! sampling:
//!   t_stop: 5.0                # seconds of trajectory to sample
//!   dt: 0.02                   # time step
//!   dx: 0.01                   # position step (static figure)
//!   history_len: 500           # optional trace length
//!
//! initial_state: [ -0.3, 0.5, -0.7853981633974483, 0.0 ]  # [x, v, phi, omega]
//! ```
//!
//! The scene builders then map this configuration into the runtime scenario
//! bundles consumed by the viewers.

use serde::Deserialize;

/// Which scene the binary runs
/// `scene: "sliding_pendulum"`, `"potential_well"` or `"well_potential_plot"`
#[derive(Deserialize, Debug, Clone)]
pub enum SceneConfig {
    #[serde(rename = "sliding_pendulum")] // animated pendulum on a sliding pivot
    SlidingPendulum,

    #[serde(rename = "potential_well")] // animated (x, t) trace of the well trajectory
    PotentialWell,

    #[serde(rename = "well_potential_plot")] // static figure of the well potential
    WellPotentialPlot,
}

/// Which integrator advances the ODE-driven scenes
/// Only the closed-form well scenes ignore this
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "rk4")] // Classical 4th-order Runge–Kutta, fixed step from the time grid
    Rk4,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub scene: SceneConfig, // which scene to run
    pub integrator: IntegratorConfig, // time integrator for ODE scenes
}

/// Physical constants for both models
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,      // gravitational acceleration
    pub l: f64,      // pendulum rod length
    pub m1: f64,     // sliding pivot mass
    pub m2: f64,     // bob mass
    pub m: f64,      // well particle mass
    pub a: f64,      // well half-width
    pub v0: f64,     // well depth scale
    pub energy: f64, // well total energy
}

/// Grid spacing and trace-history settings
#[derive(Deserialize, Debug, Clone)]
pub struct SamplingConfig {
    pub t_stop: f64, // seconds of trajectory to sample
    pub dt: f64,     // time step
    pub dx: f64,     // position step for the static figure
    pub history_len: Option<usize>, // trace length; scene default when omitted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // scene and integrator selection
    pub parameters: ParametersConfig, // physical constants
    pub sampling: SamplingConfig, // grid and history settings
    pub initial_state: Option<Vec<f64>>, // [x, v, phi, omega]; required by the pendulum scene
}
