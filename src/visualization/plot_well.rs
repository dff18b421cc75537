//! Static figure: the well potential against its bounded approximations
//!
//! Renders the tangent-squared well potential together with the harmonic
//! and sinusoidal comparison curves into an offscreen plotters bitmap,
//! then presents the bitmap in a minifb window until it is closed.

use anyhow::{Context, Result};
use minifb::{Key, Window, WindowOptions};
use plotters::prelude::*;

use crate::simulation::sampler::Grid;
use crate::simulation::scenario::PlotScenario;
use crate::simulation::well::WellModel;

const W: usize = 800;
const H: usize = 600;

fn sample_curve(grid: &Grid, f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
    grid.points().iter().map(|&x| (x, f(x))).collect()
}

pub fn run_well_plot(scenario: PlotScenario) -> Result<()> {
    let p = &scenario.parameters;
    let model = WellModel {
        m: p.m,
        a: p.a,
        v0: p.v0,
    };

    let l = 1.8 * p.a; // comparison curves extend past the walls
    let top = 30.0 * p.v0; // view cap; the well curve leaves through it

    // The well curve stops at the walls, where it diverges; the bounded
    // approximations cover the full view width
    let well = sample_curve(&Grid::space(-p.a, p.a, scenario.dx), |x| model.potential(x));
    let harmonic = sample_curve(&Grid::space(-l, l, scenario.dx), |x| model.harmonic(x));
    let sinusoidal = sample_curve(&Grid::space(-l, l, scenario.dx), |x| model.sinusoidal(x));

    // Render the whole figure into an RGB buffer
    let mut buf = vec![0u8; W * H * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (W as u32, H as u32)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Well potential", ("sans-serif", 28))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-l..l, 0.0..top)?;

        chart
            .configure_mesh()
            .x_desc("x [a. u.]")
            .y_desc("U [a. u.]")
            .draw()?;

        chart
            .draw_series(LineSeries::new(well, &BLUE))?
            .label("Well")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
        chart
            .draw_series(LineSeries::new(harmonic, &GREEN))?
            .label("Harmonic")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));
        chart
            .draw_series(LineSeries::new(sinusoidal, &MAGENTA))?
            .label("Sinusoidal")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &MAGENTA));

        // Walls at x = ±a plus the floor of the well between them
        chart
            .draw_series(LineSeries::new(vec![(-p.a, 0.0), (-p.a, top)], &RED))?
            .label("Wall")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
        chart.draw_series(LineSeries::new(vec![(p.a, 0.0), (p.a, top)], &RED))?;
        chart.draw_series(LineSeries::new(vec![(-p.a, 0.0), (p.a, 0.0)], &RED))?;

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()?;

        root.present()?;
    }

    // Repack RGB triples into the 0RGB words minifb expects
    let mut frame = vec![0u32; W * H];
    for (i, px) in buf.chunks_exact(3).enumerate() {
        frame[i] = (255u32 << 24) | ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
    }

    println!("run_well_plot: showing static figure, close the window to exit");

    let mut window = Window::new("Well potential", W, H, WindowOptions::default())
        .context("failed to create figure window")?;
    window.set_target_fps(60);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&frame, W, H)?;
    }

    Ok(())
}
