use super::{Model, Parameter, layers::Dense};
use crate::{EsrlErr, Result};

/// A stack of dense layers, its parameters ordered layer after layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequential {
    layers: Vec<Dense>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of.
    ///
    /// # Returns
    /// A new `Sequential` instance.
    pub fn new<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Dense>,
    {
        Self {
            layers: layers.into_iter().collect(),
        }
    }

    /// Creates a new `Sequential` of dense layers chaining the given dimensions.
    ///
    /// # Arguments
    /// * `dims` - The width of each layer boundary, `[2, 3, 1]` yields the layers `2x3` and `3x1`.
    ///
    /// # Returns
    /// A new `Sequential` instance or an error if there are less than two dimensions or one is zero.
    pub fn from_dims(dims: &[usize]) -> Result<Self> {
        if dims.len() < 2 {
            return Err(EsrlErr::InvalidShape(dims.to_vec()));
        }

        let layers = dims
            .windows(2)
            .map(|w| Dense::new((w[0], w[1])))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    /// Returns the amount of parameters in the model.
    pub fn size(&self) -> usize {
        self.layers.iter().map(Dense::size).sum()
    }
}

impl Model for Sequential {
    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(Dense::parameters).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.layers
            .iter_mut()
            .flat_map(Dense::parameters_mut)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dims_chains_layers() {
        let model = Sequential::from_dims(&[2, 3, 1]).unwrap();
        let shapes: Vec<_> = model.parameters().iter().map(|p| p.shape().to_vec()).collect();

        assert_eq!(shapes, [vec![2, 3], vec![3], vec![3, 1], vec![1]]);
        assert_eq!(model.size(), 13);
    }

    #[test]
    fn from_dims_needs_two_dims() {
        assert!(Sequential::from_dims(&[4]).is_err());
    }

    #[test]
    fn new_keeps_layer_order() {
        let model = Sequential::new([Dense::new((2, 1)).unwrap(), Dense::new((1, 5)).unwrap()]);

        assert_eq!(model.layers()[1].dim(), (1, 5));
        assert_eq!(model.parameters().len(), 4);
        assert_eq!(model.size(), 13);
    }
}
