use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::LrScheduler;
use crate::Result;

/// Decays the learning rate by `gamma` every epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialLr {
    base_lr: f64,
    gamma: f64,
    last_epoch: usize,
}

impl ExponentialLr {
    /// Creates a new `ExponentialLr` scheduler.
    ///
    /// # Arguments
    /// * `base_lr` - The learning rate of the first epoch.
    /// * `gamma` - The multiplicative decay per epoch.
    pub fn new(base_lr: f64, gamma: f64) -> Self {
        Self {
            base_lr,
            gamma,
            last_epoch: 0,
        }
    }
}

impl LrScheduler for ExponentialLr {
    fn step(&mut self) {
        self.last_epoch += 1;
    }

    fn lr(&self) -> f64 {
        self.base_lr * self.gamma.powf(self.last_epoch as f64)
    }

    fn state_dict(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn load_state_dict(&mut self, state: &Value) -> Result<()> {
        *self = Self::deserialize(state)?;
        Ok(())
    }
}
