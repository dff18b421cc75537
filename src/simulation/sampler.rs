//! Uniform grids and scene sampling
//!
//! `Grid` builds the uniform, half-open 1D grids every scene runs on
//! (time for the animations, position for the static figure). The
//! `sample_*` functions evaluate a model over a grid and pack the result
//! into a [`Trajectory`] for the viewers.

use crate::simulation::derivatives::SlidingPendulum;
use crate::simulation::integrator::rk4_integrate;
use crate::simulation::states::{NVec2, SVec4, Trajectory};
use crate::simulation::well::WellModel;

/// Uniform 1D grid over the half-open interval `[start, stop)`.
///
/// `stop` itself is excluded; the point count is
/// `ceil((stop - start) / step)`.
#[derive(Debug, Clone)]
pub struct Grid {
    start: f64,
    step: f64,
    n: usize,
}

impl Grid {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        let n = ((stop - start) / step).ceil() as usize;
        Self { start, step, n }
    }

    /// Time grid from 0 to `t_stop` with spacing `dt`.
    pub fn time(t_stop: f64, dt: f64) -> Self {
        Self::new(0.0, t_stop, dt)
    }

    /// Spatial grid, same half-open convention.
    pub fn space(min: f64, max: f64, step: f64) -> Self {
        Self::new(min, max, step)
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Grid spacing.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Covered span `n * step` (the nominal `stop - start`).
    pub fn span(&self) -> f64 {
        self.n as f64 * self.step
    }

    /// Materialize the grid points, monotonically increasing.
    pub fn points(&self) -> Vec<f64> {
        (0..self.n).map(|i| self.start + i as f64 * self.step).collect()
    }
}

/// Integrate the sliding pendulum over `grid` and unpack the states into
/// scene coordinates.
///
/// The pivot stays on the X axis at `(x1, 0)`; the bob hangs at
/// `(x1 + l sin phi, -l cos phi)` relative to it.
pub fn sample_pendulum(model: &SlidingPendulum, state0: SVec4, grid: &Grid) -> Trajectory {
    let states = rk4_integrate(model, state0, grid);

    let mut anchor = Vec::with_capacity(states.len());
    let mut trace = Vec::with_capacity(states.len());
    for s in &states {
        let x1 = s[0];
        let phi = s[2];
        anchor.push(NVec2::new(x1, 0.0));
        trace.push(NVec2::new(x1 + model.l * phi.sin(), -model.l * phi.cos()));
    }

    Trajectory {
        t: grid.points(),
        anchor,
        trace,
    }
}

/// Evaluate the closed-form well trajectory over `grid` as an (x, t) trace.
///
/// Displacement is stretched by `x_scale = t_stop / 2a` so the trace fills
/// a square view with time running up the vertical axis; the anchor pins
/// the origin.
pub fn sample_well(model: &WellModel, e: f64, grid: &Grid) -> Trajectory {
    let t = grid.points();
    let x_scale = grid.span() / (2.0 * model.a);

    let mut anchor = Vec::with_capacity(t.len());
    let mut trace = Vec::with_capacity(t.len());
    for &ti in &t {
        anchor.push(NVec2::zeros());
        trace.push(NVec2::new(x_scale * model.solution(ti, e), ti));
    }

    Trajectory { t, anchor, trace }
}
