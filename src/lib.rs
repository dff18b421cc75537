pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, SVec4, Trajectory};
pub use simulation::params::Parameters;
pub use simulation::derivatives::{SlidingPendulum, StateDerivative};
pub use simulation::well::WellModel;
pub use simulation::integrator::rk4_integrate;
pub use simulation::sampler::{sample_pendulum, sample_well, Grid};
pub use simulation::scenario::{PendulumScenario, PlotScenario, WellScenario};

pub use configuration::config::{
    EngineConfig, IntegratorConfig, ParametersConfig, SamplingConfig, ScenarioConfig, SceneConfig,
};

pub use visualization::history::TraceHistory;
pub use visualization::animator::{Animator, Frame};
pub use visualization::{anim_pendulum::run_pendulum, anim_well::run_well, plot_well::run_well_plot};

pub use benchmark::benchmark::bench_rk4;
