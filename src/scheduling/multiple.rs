use log::warn;
use serde_json::Value;

use super::LrScheduler;
use crate::{EsrlErr, Result};

/// A wrapper for multiple learning rate schedulers, one per optimizer.
///
/// Every call to `step` steps each of the contained schedulers in order.
#[derive(Default)]
pub struct MultipleLrSchedulers {
    schedulers: Vec<Box<dyn LrScheduler>>,
}

impl MultipleLrSchedulers {
    /// Creates a new `MultipleLrSchedulers`.
    ///
    /// # Arguments
    /// * `schedulers` - The schedulers to drive together.
    ///
    /// # Returns
    /// A new `MultipleLrSchedulers` instance.
    pub fn new<I>(schedulers: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn LrScheduler>>,
    {
        Self {
            schedulers: schedulers.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.schedulers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedulers.is_empty()
    }

    /// Takes a step in each of the learning rate schedulers.
    pub fn step(&mut self) {
        for scheduler in &mut self.schedulers {
            scheduler.step();
        }
    }

    /// Returns the current learning rate of each scheduler, in order.
    pub fn lrs(&self) -> Vec<f64> {
        self.schedulers.iter().map(|s| s.lr()).collect()
    }

    /// Returns the state of each scheduler, in order.
    pub fn state_dict(&self) -> Result<Vec<Value>> {
        self.schedulers.iter().map(|s| s.state_dict()).collect()
    }

    /// Loads the states of every scheduler.
    ///
    /// # Arguments
    /// * `states` - One state per scheduler, in the same order as the schedulers.
    ///
    /// # Returns
    /// An error if there isn't exactly one state per scheduler or if any of them fails to load,
    /// in both cases no scheduler is modified.
    pub fn load_state_dict(&mut self, states: &[Value]) -> Result<()> {
        if states.len() != self.schedulers.len() {
            return Err(EsrlErr::LengthMismatch {
                what: "scheduler states",
                got: states.len(),
                expected: self.schedulers.len(),
            });
        }

        let backup = self.state_dict()?;

        for (i, state) in states.iter().enumerate() {
            if let Err(e) = self.schedulers[i].load_state_dict(state) {
                warn!("failed to load the state of scheduler {i}, rolling back: {e}");

                for (scheduler, state) in self.schedulers[..i].iter_mut().zip(&backup) {
                    scheduler.load_state_dict(state)?;
                }

                return Err(e);
            }
        }

        Ok(())
    }
}
