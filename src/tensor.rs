//! Conversions between plain numeric buffers and typed, placed tensors.

use ndarray::{ArrayD, IxDyn};

use crate::{EsrlErr, Result, arch::Placement};

/// The element type of a `Tensor`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DType {
    #[default]
    Float,
    Long,
    Byte,
}

/// Unknown names fall back to `Float`.
impl From<&str> for DType {
    fn from(value: &str) -> Self {
        match value {
            "long" => DType::Long,
            "byte" => DType::Byte,
            _ => DType::Float,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    Float(ArrayD<f64>),
    Long(ArrayD<i64>),
    Byte(ArrayD<i8>),
}

/// A typed dense array living at a given placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: TensorData,
    placement: Placement,
}

impl Tensor {
    pub fn dtype(&self) -> DType {
        match self.data {
            TensorData::Float(_) => DType::Float,
            TensorData::Long(_) => DType::Long,
            TensorData::Byte(_) => DType::Byte,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match &self.data {
            TensorData::Float(a) => a.shape(),
            TensorData::Long(a) => a.shape(),
            TensorData::Byte(a) => a.shape(),
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn data(&self) -> &TensorData {
        &self.data
    }
}

/// Builds a tensor out of row-major values.
///
/// Integer dtypes truncate toward zero and saturate at the bounds of the type, `NaN` becomes 0.
///
/// # Arguments
/// * `values` - Exactly `product(shape)` values.
/// * `shape` - The shape of the tensor.
/// * `dtype` - The element type to cast the values into.
/// * `placement` - Where the tensor lives.
///
/// # Returns
/// A new `Tensor` or a `LengthMismatch` error if the values don't fill the shape.
pub fn to_tensor(
    values: &[f64],
    shape: &[usize],
    dtype: DType,
    placement: Placement,
) -> Result<Tensor> {
    let expected: usize = shape.iter().product();

    if values.len() != expected {
        return Err(EsrlErr::LengthMismatch {
            what: "tensor values",
            got: values.len(),
            expected,
        });
    }

    let dim = IxDyn(shape);
    let invalid = |_| EsrlErr::InvalidShape(shape.to_vec());

    let data = match dtype {
        DType::Float => {
            let values = values.to_vec();
            TensorData::Float(ArrayD::from_shape_vec(dim, values).map_err(invalid)?)
        }
        DType::Long => {
            let values = values.iter().map(|&v| v as i64).collect();
            TensorData::Long(ArrayD::from_shape_vec(dim, values).map_err(invalid)?)
        }
        DType::Byte => {
            let values = values.iter().map(|&v| v as i8).collect();
            TensorData::Byte(ArrayD::from_shape_vec(dim, values).map_err(invalid)?)
        }
    };

    Ok(Tensor { data, placement })
}

/// Copies a tensor back into a host `f64` array, whatever its dtype and placement.
pub fn to_array(tensor: &Tensor) -> ArrayD<f64> {
    match &tensor.data {
        TensorData::Float(a) => a.clone(),
        TensorData::Long(a) => a.mapv(|v| v as f64),
        TensorData::Byte(a) => a.mapv(f64::from),
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn dtype_names() {
        assert_eq!(DType::from("float"), DType::Float);
        assert_eq!(DType::from("long"), DType::Long);
        assert_eq!(DType::from("byte"), DType::Byte);
        assert_eq!(DType::from("double"), DType::Float);
    }

    #[test]
    fn float_tensor_keeps_values() {
        let tensor = to_tensor(&[1.5, 2.5], &[2, 1], DType::Float, Placement::Cpu).unwrap();

        assert_eq!(tensor.dtype(), DType::Float);
        assert_eq!(tensor.shape(), [2, 1]);
        assert_eq!(to_array(&tensor), array![[1.5], [2.5]].into_dyn());
    }

    #[test]
    fn integer_tensors_truncate() {
        let long = to_tensor(&[1.9, -1.9], &[2], DType::Long, Placement::Cpu).unwrap();
        let byte = to_tensor(&[300., -2.5], &[2], DType::Byte, Placement::Cpu).unwrap();

        assert_eq!(to_array(&long), array![1., -1.].into_dyn());
        assert_eq!(to_array(&byte), array![127., -2.].into_dyn());
    }

    #[test]
    fn placement_is_kept() {
        let tensor = to_tensor(&[0.], &[1], DType::Float, Placement::Accelerator(2)).unwrap();

        assert_eq!(tensor.placement(), Placement::Accelerator(2));
        assert_eq!(to_array(&tensor), array![0.].into_dyn());
    }

    #[test]
    fn wrong_amount_of_values() {
        let res = to_tensor(&[1., 2., 3.], &[2, 2], DType::Float, Placement::Cpu);
        assert!(matches!(res, Err(EsrlErr::LengthMismatch { expected: 4, .. })));
    }
}
