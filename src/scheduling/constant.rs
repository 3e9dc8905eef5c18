use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::LrScheduler;
use crate::{EsrlErr, Result};

/// Scales the learning rate by a constant factor for the first `total_iters` epochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantLr {
    base_lr: f64,
    factor: f64,
    total_iters: usize,
    last_epoch: usize,
}

impl ConstantLr {
    /// Creates a new `ConstantLr` scheduler.
    ///
    /// # Arguments
    /// * `base_lr` - The learning rate once the schedule is over.
    /// * `factor` - The factor applied to `base_lr` during the schedule, within `(0, 1]`.
    /// * `total_iters` - The amount of epochs the factor is applied for.
    ///
    /// # Returns
    /// A new `ConstantLr` instance or an error if the factor is out of range.
    pub fn new(base_lr: f64, factor: f64, total_iters: usize) -> Result<Self> {
        if !(factor > 0. && factor <= 1.) {
            return Err(EsrlErr::InvalidConfig(format!(
                "constant factor must lie within (0, 1], got {factor}"
            )));
        }

        Ok(Self {
            base_lr,
            factor,
            total_iters,
            last_epoch: 0,
        })
    }
}

impl LrScheduler for ConstantLr {
    fn step(&mut self) {
        self.last_epoch += 1;
    }

    fn lr(&self) -> f64 {
        if self.last_epoch < self.total_iters {
            self.base_lr * self.factor
        } else {
            self.base_lr
        }
    }

    fn state_dict(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn load_state_dict(&mut self, state: &Value) -> Result<()> {
        *self = Self::deserialize(state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_applies_for_total_iters() {
        let mut scheduler = ConstantLr::new(1., 0.1, 2).unwrap();
        let mut lrs = vec![scheduler.lr()];

        for _ in 0..3 {
            scheduler.step();
            lrs.push(scheduler.lr());
        }

        assert_eq!(lrs, [0.1, 0.1, 1., 1.]);
    }

    #[test]
    fn factor_must_be_in_range() {
        assert!(ConstantLr::new(1., 0., 2).is_err());
        assert!(ConstantLr::new(1., 1.5, 2).is_err());
    }
}
