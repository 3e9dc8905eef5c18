use serde_json::Value;

use crate::Result;

/// Decays the learning rate of an optimizer as training advances.
pub trait LrScheduler {
    /// Advances the schedule by one epoch.
    fn step(&mut self);

    /// Returns the learning rate for the current epoch.
    fn lr(&self) -> f64;

    /// Returns a snapshot of the scheduler's state.
    fn state_dict(&self) -> Result<Value>;

    /// Overwrites the scheduler's state with a snapshot taken by `state_dict`.
    ///
    /// # Returns
    /// An error if the snapshot doesn't belong to this kind of scheduler, in which case the
    /// scheduler is left untouched.
    fn load_state_dict(&mut self, state: &Value) -> Result<()>;
}
