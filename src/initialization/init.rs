use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};

use crate::Result;

/// The rule drawing the initial values of a single parameter.
///
/// The scaled rules read the fans off the parameter's shape: `[fan_in, fan_out, ..]` for a
/// matrix, while a vector of length `n` counts `n` as both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Init {
    Constant { value: f64 },
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
    XavierUniform,
    KaimingNormal,
}

impl Init {
    /// Resolves this rule into a distribution for a parameter of the given shape.
    ///
    /// # Returns
    /// An `Init` error if the distribution's arguments are invalid, for example an empty
    /// uniform range or a non finite standard deviation.
    pub(super) fn sampler(self, shape: &[usize]) -> Result<Sampler> {
        let (fan_in, fan_out) = fans(shape);

        let sampler = match self {
            Init::Constant { value } => Sampler::Constant(value),
            Init::Uniform { low, high } => Sampler::Uniform(Uniform::new(low, high)?),
            Init::Normal { mean, std_dev } => Sampler::Normal(Normal::new(mean, std_dev)?),
            Init::XavierUniform => {
                let bound = (6. / (fan_in + fan_out) as f64).sqrt();
                Sampler::Uniform(Uniform::new_inclusive(-bound, bound)?)
            }
            Init::KaimingNormal => {
                let std_dev = (2. / fan_in as f64).sqrt();
                Sampler::Normal(Normal::new(0., std_dev)?)
            }
        };

        Ok(sampler)
    }
}

/// A resolved `Init`, ready to draw values.
#[derive(Debug)]
pub(super) enum Sampler {
    Constant(f64),
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

impl Distribution<f64> for Sampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Constant(value) => *value,
            Sampler::Uniform(uniform) => uniform.sample(rng),
            Sampler::Normal(normal) => normal.sample(rng),
        }
    }
}

/// Returns the fan in and fan out of a parameter shaped `shape`.
fn fans(shape: &[usize]) -> (usize, usize) {
    match shape {
        [] => (1, 1),
        [n] => (*n, *n),
        [fan_in, rest @ ..] => (*fan_in, rest.iter().product()),
    }
}
