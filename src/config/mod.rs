mod builder;
mod spec;

pub use builder::ExperimentBuilder;
pub use spec::{ExperimentConfig, ModelSpec, SchedulerSpec};
