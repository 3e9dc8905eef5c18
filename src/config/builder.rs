use std::cell::RefCell;

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use super::{ExperimentConfig, ModelSpec, SchedulerSpec};
use crate::{
    Result,
    arch::{Model, Sequential},
    scheduling::{ConstantLr, ExponentialLr, LrScheduler, MultipleLrSchedulers},
};

/// Builds the runtime components of an experiment following its configuration.
pub struct ExperimentBuilder<'a> {
    config: &'a ExperimentConfig,
    rng: RefCell<StdRng>,
}

impl<'a> ExperimentBuilder<'a> {
    /// Creates a new `ExperimentBuilder`.
    ///
    /// Every model built by the same builder draws from the same random number generator, so
    /// two calls to `model` yield differently initialized models.
    ///
    /// # Arguments
    /// * `config` - The configuration of the experiment.
    pub fn new(config: &'a ExperimentConfig) -> Self {
        let rng = RefCell::new(Self::generate_rng(config.seed));
        Self { config, rng }
    }

    /// Builds the learning rate schedulers, all of them starting at the configured learning rate.
    pub fn schedulers(&self) -> Result<MultipleLrSchedulers> {
        let schedulers = self
            .config
            .schedulers
            .iter()
            .map(|spec| self.resolve_scheduler(*spec))
            .collect::<Result<Vec<_>>>()?;

        Ok(MultipleLrSchedulers::new(schedulers))
    }

    /// Builds a freshly initialized model placed where the configuration says.
    pub fn model(&self) -> Result<Sequential> {
        let mut model = self.resolve_model(&self.config.model)?;
        model.place(self.config.placement);

        debug!(
            "built a model of {} layers on {}",
            model.layers().len(),
            self.config.placement
        );

        Ok(model)
    }

    fn resolve_scheduler(&self, spec: SchedulerSpec) -> Result<Box<dyn LrScheduler>> {
        let base_lr = self.config.learning_rate;

        let scheduler: Box<dyn LrScheduler> = match spec {
            SchedulerSpec::Constant {
                factor,
                total_iters,
            } => Box::new(ConstantLr::new(base_lr, factor, total_iters)?),
            SchedulerSpec::Exponential { gamma } => Box::new(ExponentialLr::new(base_lr, gamma)),
        };

        Ok(scheduler)
    }

    fn resolve_model(&self, spec: &ModelSpec) -> Result<Sequential> {
        let mut model = Sequential::from_dims(&spec.dims)?;
        spec.init.init(&mut model, &mut *self.rng.borrow_mut())?;
        Ok(model)
    }

    fn generate_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
