use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD, IxDyn};

use super::Placement;
use crate::{EsrlErr, Result};

/// A dense tensor of learnable values with a fixed shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    values: ArrayD<f64>,
    placement: Placement,
}

impl Parameter {
    /// Creates a new `Parameter` filled with zeros.
    ///
    /// # Arguments
    /// * `shape` - The shape of the parameter, every dimension must be positive.
    ///
    /// # Returns
    /// A new `Parameter` instance or an error if the shape is invalid.
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::from_shape_vec(shape, vec![0.; shape.iter().product()])
    }

    /// Creates a new `Parameter` from row-major values.
    ///
    /// # Arguments
    /// * `shape` - The shape of the parameter, every dimension must be positive.
    /// * `values` - Exactly `product(shape)` values.
    ///
    /// # Returns
    /// A new `Parameter` instance or an error if the shape and the values disagree.
    pub fn from_shape_vec(shape: &[usize], values: Vec<f64>) -> Result<Self> {
        if shape.contains(&0) {
            return Err(EsrlErr::InvalidShape(shape.to_vec()));
        }

        let expected = shape.iter().product();
        if values.len() != expected {
            return Err(EsrlErr::LengthMismatch {
                what: "parameter values",
                got: values.len(),
                expected,
            });
        }

        let values = ArrayD::from_shape_vec(IxDyn(shape), values)
            .map_err(|_| EsrlErr::InvalidShape(shape.to_vec()))?;

        Ok(Self {
            values,
            placement: Placement::default(),
        })
    }

    /// Creates a new `Parameter` taking ownership of an array.
    ///
    /// # Returns
    /// A new `Parameter` instance or an error if any of the array's dimensions is zero.
    pub fn from_array(values: ArrayD<f64>) -> Result<Self> {
        if values.shape().contains(&0) {
            return Err(EsrlErr::InvalidShape(values.shape().to_vec()));
        }

        Ok(Self {
            values,
            placement: Placement::default(),
        })
    }

    /// Moves this parameter to `placement`.
    pub fn on(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }

    /// Returns the amount of values this parameter holds.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> ArrayViewD<'_, f64> {
        self.values.view()
    }

    pub fn values_mut(&mut self) -> ArrayViewMutD<'_, f64> {
        self.values.view_mut()
    }
}
