use std::time::Instant;

use crate::simulation::derivatives::SlidingPendulum;
use crate::simulation::integrator::rk4_integrate;
use crate::simulation::sampler::Grid;
use crate::simulation::states::SVec4;

/// Time the RK4 sweep over growing grids and print CSV to stdout.
///
/// Output columns: grid points, elapsed ms, ms per step.
pub fn bench_rk4() {
    // Different grid sizes to test
    let ns = [1_000, 10_000, 100_000, 1_000_000];

    let model = SlidingPendulum {
        g: 9.8,
        l: 1.0,
        m1: 1.0,
        m2: 1.0,
    };
    let state0 = SVec4::new(-0.3, 0.5, -std::f64::consts::FRAC_PI_4, 0.0);

    for n in ns {
        let dt = 0.02;
        let grid = Grid::new(0.0, n as f64 * dt, dt);

        let t0 = Instant::now();
        let states = rk4_integrate(&model, state0, &grid);
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms_per_step = elapsed / states.len() as f64;

        println!("{},{:.6},{:.9}", states.len(), elapsed, ms_per_step);
    }
}
