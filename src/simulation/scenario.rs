//! Build fully-initialized scene bundles from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces runtime bundles,
//! one per scene kind:
//! - [`PendulumScenario`] – parameters, time grid and initial state
//! - [`WellScenario`]     – parameters and time grid
//! - [`PlotScenario`]     – parameters and position step
//!
//! The animated bundles are inserted into Bevy as `Resource`s and consumed
//! by the viewer systems; the plot bundle feeds the static figure directly.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::params::Parameters;
use crate::simulation::sampler::Grid;
use crate::simulation::states::SVec4;

fn build_parameters(cfg: &ScenarioConfig) -> Parameters {
    let p_cfg = &cfg.parameters;
    Parameters {
        g: p_cfg.g,
        l: p_cfg.l,
        m1: p_cfg.m1,
        m2: p_cfg.m2,
        m: p_cfg.m,
        a: p_cfg.a,
        v0: p_cfg.v0,
        energy: p_cfg.energy,
    }
}

/// Bevy resource for the animated sliding-pendulum scene
///
/// Carries everything the viewer needs to sample and play the trajectory:
/// physical parameters, the time grid, the initial state vector and the
/// trace-history capacity.
#[derive(Resource)]
pub struct PendulumScenario {
    pub parameters: Parameters,
    pub grid: Grid,
    pub state0: SVec4,
    pub history_len: usize,
}

impl PendulumScenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let parameters = build_parameters(&cfg);
        let grid = Grid::time(cfg.sampling.t_stop, cfg.sampling.dt);

        // Initial state: map the raw YAML list onto [x, v, phi, omega]
        let ic = cfg
            .initial_state
            .as_ref()
            .expect("sliding_pendulum scenario requires initial_state");
        let state0 = SVec4::new(ic[0], ic[1], ic[2], ic[3]);

        // How many trajectory points the fading trace keeps
        let history_len = cfg.sampling.history_len.unwrap_or(500);

        Self {
            parameters,
            grid,
            state0,
            history_len,
        }
    }
}

/// Bevy resource for the animated potential-well scene
///
/// The trajectory is closed-form, so no initial state is needed; the energy
/// selecting the orbit lives in `parameters`.
#[derive(Resource)]
pub struct WellScenario {
    pub parameters: Parameters,
    pub grid: Grid,
    pub history_len: usize,
}

impl WellScenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let parameters = build_parameters(&cfg);
        let grid = Grid::time(cfg.sampling.t_stop, cfg.sampling.dt);

        // Default history covers the whole trajectory, so the trace never fades
        let history_len = cfg
            .sampling
            .history_len
            .unwrap_or_else(|| (cfg.sampling.t_stop / cfg.sampling.dt).ceil() as usize);

        Self {
            parameters,
            grid,
            history_len,
        }
    }
}

/// Scene bundle for the static well-potential figure.
pub struct PlotScenario {
    pub parameters: Parameters,
    pub dx: f64,
}

impl PlotScenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let parameters = build_parameters(&cfg);
        Self {
            parameters,
            dx: cfg.sampling.dx,
        }
    }
}
