use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{EsrlErr, Result, arch::Placement, initialization::Initializer};

const DEFAULT_TAU: f64 = 0.005;

/// The specification for a `Sequential` model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub dims: Vec<usize>,
    #[serde(default)]
    pub init: Initializer,
}

/// The specification for the `LrScheduler` trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerSpec {
    Constant { factor: f64, total_iters: usize },
    Exponential { gamma: f64 },
}

/// The configuration of an experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub output_dir: PathBuf,
    pub env_name: String,
    pub model: ModelSpec,
    pub learning_rate: f64,
    #[serde(default)]
    pub schedulers: Vec<SchedulerSpec>,
    #[serde(default = "default_tau")]
    pub tau: f64,
    #[serde(default)]
    pub placement: Placement,
    pub seed: Option<u64>,
}

fn default_tau() -> f64 {
    DEFAULT_TAU
}

impl ExperimentConfig {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Checks the values serde can't.
    pub fn validate(&self) -> Result<()> {
        if self.env_name.is_empty() {
            return Err(EsrlErr::InvalidConfig("env_name must not be empty".into()));
        }

        if !(0.0..=1.0).contains(&self.tau) {
            return Err(EsrlErr::InvalidTau(self.tau));
        }

        if !(self.learning_rate > 0.) {
            return Err(EsrlErr::InvalidConfig(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }

        if self.model.dims.len() < 2 || self.model.dims.contains(&0) {
            return Err(EsrlErr::InvalidConfig(format!(
                "model dims must hold at least two positive values, got {:?}",
                self.model.dims
            )));
        }

        Ok(())
    }
}
