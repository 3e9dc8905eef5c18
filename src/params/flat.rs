use log::debug;
use ndarray::{Array1, ArrayView1, s};

use crate::{EsrlErr, Result, arch::Model};

/// Returns the amount of values held by all the parameters of a model.
pub fn num_params<M: Model + ?Sized>(model: &M) -> usize {
    model.parameters().iter().map(|param| param.len()).sum()
}

/// Concatenates every parameter of a model into a single vector.
///
/// Parameters are visited in the model's traversal order and each one is read in row-major order.
/// An empty model yields an empty vector.
///
/// # Arguments
/// * `model` - The model to read the parameters from.
///
/// # Returns
/// A new vector of length `num_params(model)`.
pub fn flatten<M: Model + ?Sized>(model: &M) -> Array1<f64> {
    let params = model.parameters();
    let mut flat = Vec::with_capacity(params.iter().map(|param| param.len()).sum());

    for param in params {
        flat.extend(param.values().iter().copied());
    }

    Array1::from(flat)
}

/// Overwrites every parameter of a model with the values of a flat vector.
///
/// The vector is consumed front to back, `product(shape)` values per parameter in the model's
/// traversal order, so `restore(model, flatten(model))` leaves the model unchanged.
///
/// # Arguments
/// * `model` - The model whose parameters are overwritten.
/// * `flat` - Exactly `num_params(model)` values.
///
/// # Returns
/// A `LengthMismatch` error if the vector is shorter or longer than the model, in which case the
/// model is left untouched.
pub fn restore<M: Model + ?Sized>(model: &mut M, flat: ArrayView1<'_, f64>) -> Result<()> {
    let expected = num_params(&*model);

    if flat.len() != expected {
        return Err(EsrlErr::LengthMismatch {
            what: "flat parameter vector",
            got: flat.len(),
            expected,
        });
    }

    let mut cursor = 0;

    for param in model.parameters_mut() {
        let end = cursor + param.len();
        let chunk = flat.slice(s![cursor..end]);

        param
            .values_mut()
            .iter_mut()
            .zip(chunk)
            .for_each(|(p, &v)| *p = v);

        cursor = end;
    }

    debug!("restored {expected} values into the model");
    Ok(())
}
