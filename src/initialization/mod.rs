//! Initial values for a model's parameters.

mod init;

pub use init::Init;

use log::debug;
use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    arch::{Model, Parameter},
};

/// Fills the parameters of a model, picking a rule for each one by its rank.
///
/// Matrices (and higher ranks) follow `weights`, vectors and scalars follow `biases`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Initializer {
    pub weights: Init,
    pub biases: Init,
}

impl Default for Initializer {
    fn default() -> Self {
        Self {
            weights: Init::XavierUniform,
            biases: Init::Constant { value: 0. },
        }
    }
}

impl Initializer {
    /// Overwrites every parameter of `model` with freshly drawn values, in traversal order.
    ///
    /// # Arguments
    /// * `model` - The model to initialize.
    /// * `rng` - The random number generator to draw the values with.
    ///
    /// # Returns
    /// An `Init` error if a rule can't be resolved for some parameter, in which case the model
    /// is left untouched.
    pub fn init<M, R>(&self, model: &mut M, rng: &mut R) -> Result<()>
    where
        M: Model + ?Sized,
        R: Rng + ?Sized,
    {
        let samplers = model
            .parameters()
            .into_iter()
            .map(|param| self.rule(param).sampler(param.shape()))
            .collect::<Result<Vec<_>>>()?;

        for (param, sampler) in model.parameters_mut().into_iter().zip(&samplers) {
            param
                .values_mut()
                .mapv_inplace(|_| sampler.sample(&mut *rng));
        }

        debug!("initialized {} parameters", samplers.len());
        Ok(())
    }

    fn rule(&self, param: &Parameter) -> Init {
        if param.shape().len() >= 2 {
            self.weights
        } else {
            self.biases
        }
    }
}
