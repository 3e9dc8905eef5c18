use crate::{EsrlErr, Result, arch::Model};

/// Checks that two models have the same amount of parameters with the same shapes, in the same
/// order.
///
/// # Arguments
/// * `target` - The model whose structure is being checked.
/// * `source` - The model whose structure is the expected one.
///
/// # Returns
/// A `ParamCountMismatch` or a `ShapeMismatch` error describing the first difference found.
pub fn check_same_structure<T, S>(target: &T, source: &S) -> Result<()>
where
    T: Model + ?Sized,
    S: Model + ?Sized,
{
    let target = target.parameters();
    let source = source.parameters();

    if target.len() != source.len() {
        return Err(EsrlErr::ParamCountMismatch {
            got: target.len(),
            expected: source.len(),
        });
    }

    for (index, (t, s)) in target.iter().zip(&source).enumerate() {
        if t.shape() != s.shape() {
            return Err(EsrlErr::ShapeMismatch {
                index,
                got: t.shape().to_vec(),
                expected: s.shape().to_vec(),
            });
        }
    }

    Ok(())
}
