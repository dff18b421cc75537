use mechanim::{PendulumScenario, PlotScenario, WellScenario};
use mechanim::{ScenarioConfig, SceneConfig};
use mechanim::{run_pendulum, run_well, run_well_plot};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "sliding_pendulum.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml().expect("failed to load scenario");

    match scenario_cfg.engine.scene.clone() {
        SceneConfig::SlidingPendulum => {
            let scenario = PendulumScenario::build_scenario(scenario_cfg);
            run_pendulum(scenario);
        }
        SceneConfig::PotentialWell => {
            let scenario = WellScenario::build_scenario(scenario_cfg);
            run_well(scenario);
        }
        SceneConfig::WellPotentialPlot => {
            let scenario = PlotScenario::build_scenario(scenario_cfg);
            run_well_plot(scenario)?;
        }
    }

    //bench_rk4();

    Ok(())
}
