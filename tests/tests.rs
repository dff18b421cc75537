use mechanim::simulation::derivatives::{SlidingPendulum, StateDerivative};
use mechanim::simulation::integrator::rk4_integrate;
use mechanim::simulation::sampler::{sample_pendulum, sample_well, Grid};
use mechanim::simulation::scenario::{PendulumScenario, WellScenario};
use mechanim::simulation::states::{NVec2, SVec4};
use mechanim::simulation::well::WellModel;
use mechanim::configuration::config::{
    EngineConfig, IntegratorConfig, ParametersConfig, SamplingConfig, ScenarioConfig, SceneConfig,
};
use mechanim::visualization::animator::Animator;
use mechanim::visualization::history::TraceHistory;

/// Pendulum with unit masses and rod, standard gravity
pub fn test_pendulum() -> SlidingPendulum {
    SlidingPendulum {
        g: 9.8,
        l: 1.0,
        m1: 1.0,
        m2: 1.0,
    }
}

/// Unit well: V_0 = a = m = 1
pub fn test_well() -> WellModel {
    WellModel {
        m: 1.0,
        a: 1.0,
        v0: 1.0,
    }
}

/// Scenario config with the checked-in sliding-pendulum constants
pub fn test_config(scene: SceneConfig) -> ScenarioConfig {
    ScenarioConfig {
        engine: EngineConfig {
            scene,
            integrator: IntegratorConfig::Rk4,
        },
        parameters: ParametersConfig {
            g: 9.8,
            l: 1.0,
            m1: 1.0,
            m2: 1.0,
            m: 1.0,
            a: 1.0,
            v0: 1.0,
            energy: 1.0,
        },
        sampling: SamplingConfig {
            t_stop: 5.0,
            dt: 0.02,
            dx: 0.01,
            history_len: None,
        },
        initial_state: Some(vec![-0.3, 0.5, -std::f64::consts::FRAC_PI_4, 0.0]),
    }
}

/// Harmonic oscillator on both coordinate pairs, for integrator accuracy tests
struct Harmonic;

impl StateDerivative for Harmonic {
    fn derivs(&self, _t: f64, s: &SVec4) -> SVec4 {
        SVec4::new(s[1], -s[0], s[3], -s[2])
    }
}

// ==================================================================================
// Pendulum derivative tests
// ==================================================================================

#[test]
fn pendulum_at_rest_stays_at_rest() {
    let model = test_pendulum();
    let d = model.derivs(0.0, &SVec4::new(0.2, 0.0, 0.0, 0.0));

    assert_eq!(d[0], 0.0, "pivot should not move");
    assert_eq!(d[1], 0.0, "no horizontal force at phi = 0");
    assert_eq!(d[2], 0.0, "angle should not change");
    assert_eq!(d[3], 0.0, "no torque at phi = 0");
}

#[test]
fn pendulum_small_angle_gravitational_term() {
    let model = test_pendulum();
    let phi = 1e-5;
    let d = model.derivs(0.0, &SVec4::new(0.0, 0.0, phi, 0.0));

    // Small angles: alpha -> -(g/l) (1 + m2/m1) phi for the sliding pivot
    let expected = -model.g / model.l * (1.0 + model.m2 / model.m1) * phi;
    let rel = (d[3] - expected).abs() / expected.abs();
    assert!(rel < 1e-8, "alpha {} vs small-angle term {}", d[3], expected);
}

#[test]
fn pendulum_derivative_is_repeatable() {
    let model = test_pendulum();
    let state = SVec4::new(-0.3, 0.5, -0.7, 0.2);

    let d1 = model.derivs(0.0, &state);
    let d2 = model.derivs(3.7, &state);

    assert_eq!(d1, d2, "derivative must be stateless and time-independent");
}

// ==================================================================================
// Well model tests
// ==================================================================================

#[test]
fn well_potential_zero_at_origin() {
    let model = test_well();
    assert_eq!(model.potential(0.0), 0.0);
}

#[test]
fn well_potential_increases_and_diverges() {
    let model = test_well();

    let mut prev = 0.0;
    for i in 1..100 {
        let x = 0.99 * model.a * i as f64 / 100.0;
        let u = model.potential(x);
        assert!(u > prev, "potential not increasing at x = {}", x);
        prev = u;
    }

    assert!(model.potential(model.a * (1.0 - 1e-9)) > 1e10, "no divergence near the wall");
}

#[test]
fn well_approximations_match_near_origin() {
    let model = test_well();

    // tan^2, (.)^2 and sin^2 of the same argument agree to O(x^4)
    let x = 1e-3;
    let u = model.potential(x);
    assert!((model.harmonic(x) - u).abs() < 1e-9);
    assert!((model.sinusoidal(x) - u).abs() < 1e-9);
}

#[test]
fn well_solution_starts_at_zero() {
    let model = test_well();
    for e in [0.1, 1.0, 100.0] {
        assert_eq!(model.solution(0.0, e), 0.0, "x(0) != 0 for E = {}", e);
    }
}

#[test]
fn well_solution_is_periodic() {
    let model = test_well();

    for e in [0.1, 1.0, 100.0] {
        let period = model.period(e);
        for t in [0.3, 0.7, 1.1] {
            let x0 = model.solution(t, e);
            let x1 = model.solution(t + period, e);
            assert!((x0 - x1).abs() < 1e-9, "not periodic at t = {}, E = {}", t, e);
        }
    }
}

#[test]
fn well_unit_scenario_end_to_end() {
    // V0 = a = m = 1 and E = V0: the period is exactly 4 sqrt(1/4) = 2
    let model = test_well();
    let e = 1.0;
    assert!((model.period(e) - 2.0).abs() < 1e-12);

    // Over one period the trajectory passes 0 -> max -> 0
    let x0 = model.solution(0.0, e);
    let x_quarter = model.solution(0.5, e);
    let x_half = model.solution(1.0, e);

    assert_eq!(x0, 0.0);
    assert!((x_quarter - 0.5).abs() < 1e-12, "turning point at {}", x_quarter);
    assert!(x_quarter <= model.a);
    assert!(x_half.abs() < 1e-9, "not back at the origin: {}", x_half);
}

// ==================================================================================
// Grid and integrator tests
// ==================================================================================

#[test]
fn time_grid_is_half_open_and_uniform() {
    let grid = Grid::time(5.0, 0.02);

    assert_eq!(grid.len(), 250);
    assert!((grid.step() - 0.02).abs() < 1e-15);

    let ts = grid.points();
    assert_eq!(ts[0], 0.0);
    assert!(*ts.last().unwrap() < 5.0, "stop must be excluded");
    for w in ts.windows(2) {
        assert!(w[1] > w[0], "grid not monotonically increasing");
    }
}

#[test]
fn space_grid_covers_symmetric_interval() {
    let grid = Grid::space(-1.0, 1.0, 0.01);

    assert_eq!(grid.len(), 200);
    assert_eq!(grid.points()[0], -1.0);
    assert!(*grid.points().last().unwrap() < 1.0);
}

#[test]
fn rk4_tracks_harmonic_oscillator() {
    let grid = Grid::time(std::f64::consts::PI, 0.001);
    let states = rk4_integrate(&Harmonic, SVec4::new(1.0, 0.0, 1.0, 0.0), &grid);

    assert_eq!(states.len(), grid.len());

    // Exact solution is cos(t); fixed-step RK4 at h = 1e-3 stays well inside 1e-9
    for (s, t) in states.iter().zip(grid.points()) {
        assert!((s[0] - t.cos()).abs() < 1e-9, "drift at t = {}", t);
        assert!((s[2] - t.cos()).abs() < 1e-9, "drift at t = {}", t);
    }
}

#[test]
fn rk4_keeps_initial_state_first() {
    let grid = Grid::time(1.0, 0.1);
    let state0 = SVec4::new(-0.3, 0.5, -0.7, 0.0);
    let states = rk4_integrate(&test_pendulum(), state0, &grid);

    assert_eq!(states[0], state0);
}

// ==================================================================================
// Sampler tests
// ==================================================================================

#[test]
fn pendulum_trajectory_is_grid_aligned() {
    let grid = Grid::time(2.0, 0.02);
    let model = test_pendulum();
    let trajectory = sample_pendulum(&model, SVec4::new(-0.3, 0.5, -0.7, 0.0), &grid);

    assert_eq!(trajectory.len(), grid.len());
    assert_eq!(trajectory.anchor.len(), trajectory.trace.len());

    // The anchor never leaves the X axis and the rod length is preserved
    for (anchor, bob) in trajectory.anchor.iter().zip(trajectory.trace.iter()) {
        assert_eq!(anchor.y, 0.0);
        let rod = (bob - anchor).norm();
        assert!((rod - model.l).abs() < 1e-12, "rod stretched to {}", rod);
    }
}

#[test]
fn well_trajectory_climbs_the_time_axis() {
    let grid = Grid::time(5.0, 0.005);
    let model = test_well();
    let trajectory = sample_well(&model, 1.0, &grid);

    assert_eq!(trajectory.len(), grid.len());

    // y carries the sample time, x stays inside the scaled walls
    let half_width = grid.span() / 2.0;
    for (i, (p, t)) in trajectory.trace.iter().zip(grid.points()).enumerate() {
        assert_eq!(p.y, t, "frame {} not aligned with the grid", i);
        assert!(p.x.abs() <= half_width);
    }
}

// ==================================================================================
// History buffer and animator tests
// ==================================================================================

#[test]
fn history_evicts_oldest_beyond_capacity() {
    let mut history = TraceHistory::new(3);
    for i in 0..10 {
        history.push_front(NVec2::new(i as f64, 0.0));
        assert!(history.len() <= 3, "capacity exceeded after push {}", i);
    }

    // Exactly the most recent points, newest first
    let xs: Vec<f64> = history.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![9.0, 8.0, 7.0]);
}

#[test]
fn history_clear_empties_the_trace() {
    let mut history = TraceHistory::new(4);
    history.push_front(NVec2::new(1.0, 2.0));
    history.push_front(NVec2::new(3.0, 4.0));

    history.clear();
    assert!(history.is_empty());
}

#[test]
fn animator_resets_history_on_frame_zero() {
    let grid = Grid::time(1.0, 0.01);
    let trajectory = sample_well(&test_well(), 1.0, &grid);
    let mut animator = Animator::new(trajectory, 50, grid.step());

    for i in 0..40 {
        animator.advance(i);
    }
    assert_eq!(animator.history().len(), 40);

    // Looping back to frame 0 leaves exactly the frame-0 point
    let frame = animator.advance(0);
    assert_eq!(animator.history().len(), 1);
    assert_eq!(animator.history().iter().next().unwrap(), &frame.point);
}

#[test]
fn animator_formats_elapsed_time() {
    let grid = Grid::time(5.0, 0.02);
    let trajectory = sample_well(&test_well(), 1.0, &grid);
    let mut animator = Animator::new(trajectory, 500, grid.step());

    assert_eq!(animator.advance(0).label, "time = 0.0s");
    assert_eq!(animator.advance(55).label, "time = 1.1s");
    assert!((animator.interval_ms() - 20.0).abs() < 1e-9);
}

// ==================================================================================
// Scenario building tests
// ==================================================================================

#[test]
fn pendulum_scenario_from_config() {
    let scenario = PendulumScenario::build_scenario(test_config(SceneConfig::SlidingPendulum));

    assert_eq!(scenario.grid.len(), 250);
    assert_eq!(scenario.history_len, 500, "default trace length");
    assert_eq!(scenario.state0[0], -0.3);
    assert_eq!(scenario.state0[1], 0.5);
}

#[test]
fn well_scenario_history_defaults_to_full_trajectory() {
    let mut cfg = test_config(SceneConfig::PotentialWell);
    cfg.sampling.dt = 0.005;
    let scenario = WellScenario::build_scenario(cfg);

    assert_eq!(scenario.history_len, 1000);
    assert_eq!(scenario.grid.len(), 1000);
}
