use std::{env, fs};

use anyhow::Context;
use log::info;

use esrl::{
    config::{ExperimentBuilder, ExperimentConfig},
    console, output,
    params::{self, num_params},
};

const CONFIG_VAR: &str = "ESRL_CONFIG";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::var(CONFIG_VAR)
        .with_context(|| format!("{CONFIG_VAR} must point to a JSON experiment config"))?;

    let config = ExperimentConfig::load(&path).with_context(|| format!("loading {path}"))?;
    let run_dir = output::output_folder(&config.output_dir, &config.env_name)?;

    let builder = ExperimentBuilder::new(&config);
    let schedulers = builder.schedulers()?;
    let online = builder.model()?;
    let mut target = builder.model()?;
    params::hard_update(&mut target, &online)?;

    info!(
        "model with {} parameters, {} schedulers starting at {:?}",
        num_params(&online),
        schedulers.len(),
        schedulers.lrs()
    );
    info!("target network synced, soft updates will use tau = {}", config.tau);

    let resolved = serde_json::to_string_pretty(&config)?;
    fs::write(run_dir.join("config.json"), resolved)?;

    console::pr_green(run_dir.display());
    Ok(())
}
