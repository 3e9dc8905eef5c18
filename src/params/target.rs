use log::debug;
use ndarray::Zip;

use super::check_same_structure;
use crate::{EsrlErr, Result, arch::Model};

/// Copies every parameter of `source` into `target`.
///
/// Both models must have the same parameter structure. Placements may differ, each target
/// parameter keeps its own.
///
/// # Arguments
/// * `target` - The model being overwritten.
/// * `source` - The model to copy the values from.
///
/// # Returns
/// A structural error if the models differ, in which case `target` is left untouched.
pub fn hard_update<T, S>(target: &mut T, source: &S) -> Result<()>
where
    T: Model + ?Sized,
    S: Model + ?Sized,
{
    check_same_structure(&*target, source)?;
    copy_params(target, source);

    debug!("hard updated target on {}", target.placement());
    Ok(())
}

/// Blends every parameter of `source` into `target`: `t = t * (1 - tau) + s * tau`.
///
/// A `tau` of 0 leaves `target` unchanged and a `tau` of 1 is a hard update, even when some
/// values aren't finite.
///
/// # Arguments
/// * `target` - The model being updated.
/// * `source` - The model to blend the values from.
/// * `tau` - The blend factor, within `[0, 1]`.
///
/// # Returns
/// An `InvalidTau` error if `tau` is out of range or a structural error if the models differ,
/// in both cases `target` is left untouched.
pub fn soft_update<T, S>(target: &mut T, source: &S, tau: f64) -> Result<()>
where
    T: Model + ?Sized,
    S: Model + ?Sized,
{
    if !(0.0..=1.0).contains(&tau) {
        return Err(EsrlErr::InvalidTau(tau));
    }

    check_same_structure(&*target, source)?;

    if tau == 0. {
        debug!("soft update with tau = 0 skipped");
        return Ok(());
    }

    if tau == 1. {
        copy_params(target, source);
    } else {
        let source = source.parameters();
        for (t, s) in target.parameters_mut().into_iter().zip(source) {
            Zip::from(t.values_mut())
                .and(s.values())
                .for_each(|t, &s| *t = *t * (1. - tau) + s * tau);
        }
    }

    debug!("soft updated target with tau = {tau}");
    Ok(())
}

/// Assumes both models share the same structure.
fn copy_params<T, S>(target: &mut T, source: &S)
where
    T: Model + ?Sized,
    S: Model + ?Sized,
{
    let source = source.parameters();
    for (t, s) in target.parameters_mut().into_iter().zip(source) {
        t.values_mut().assign(&s.values());
    }
}
