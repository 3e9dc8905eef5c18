use crate::{Result, arch::Parameter};

/// A fully connected layer holding a `[in, out]` weight matrix and an `[out]` bias vector.
///
/// The weights come before the biases in the layer's parameter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    dim: (usize, usize),
    weights: Parameter,
    biases: Parameter,
}

impl Dense {
    /// Creates a new `Dense` layer with zeroed parameters.
    ///
    /// # Arguments
    /// * `dim` - The amount of inputs and outputs of the layer.
    ///
    /// # Returns
    /// A new `Dense` instance or an error if any of the dimensions is zero.
    pub fn new(dim: (usize, usize)) -> Result<Self> {
        Ok(Self {
            dim,
            weights: Parameter::zeros(&[dim.0, dim.1])?,
            biases: Parameter::zeros(&[dim.1])?,
        })
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    /// Returns the amount of parameters this layer has.
    pub fn size(&self) -> usize {
        (self.dim.0 + 1) * self.dim.1
    }

    pub fn weights(&self) -> &Parameter {
        &self.weights
    }

    pub fn biases(&self) -> &Parameter {
        &self.biases
    }

    pub(crate) fn parameters(&self) -> [&Parameter; 2] {
        [&self.weights, &self.biases]
    }

    pub(crate) fn parameters_mut(&mut self) -> [&mut Parameter; 2] {
        [&mut self.weights, &mut self.biases]
    }
}
