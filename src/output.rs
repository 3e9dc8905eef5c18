//! Experiment output folders.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{EsrlErr, Result};

const RUN_SEP: &str = "-run";

/// Creates and returns a new run folder for an experiment.
///
/// Folders inside `parent_dir` are expected to end in `-run{id}`. The new folder is named
/// `{env_name}-run{id}` with an id one above the highest found, so running the same experiment
/// several times never overwrites a previous run.
///
/// # Arguments
/// * `parent_dir` - The directory holding every run, created if missing.
/// * `env_name` - The name of the environment being trained on.
///
/// # Returns
/// The path to the newly created run folder, or a `RunIdsExhausted` error if some folder already
/// holds the highest possible id.
pub fn output_folder<P: AsRef<Path>>(parent_dir: P, env_name: &str) -> Result<PathBuf> {
    let parent_dir = parent_dir.as_ref();
    fs::create_dir_all(parent_dir)?;

    let mut experiment_id = 0;

    for entry in fs::read_dir(parent_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let Some(id) = path.file_name().and_then(|name| name.to_str()).and_then(run_id) else {
            continue;
        };

        experiment_id = experiment_id.max(id);
    }

    let experiment_id = experiment_id
        .checked_add(1)
        .ok_or_else(|| EsrlErr::RunIdsExhausted(parent_dir.to_path_buf()))?;

    let run_dir = parent_dir.join(format!("{env_name}{RUN_SEP}{experiment_id}"));
    fs::create_dir_all(&run_dir)?;

    info!("created output folder {}", run_dir.display());
    Ok(run_dir)
}

/// Parses the id after the last `-run` of a folder name, the whole name if there's none.
fn run_id(folder_name: &str) -> Option<u64> {
    folder_name.rsplit(RUN_SEP).next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_ids() {
        assert_eq!(run_id("Pendulum-v1-run3"), Some(3));
        assert_eq!(run_id("a-run2-run10"), Some(10));
        assert_eq!(run_id("7"), Some(7));
        assert_eq!(run_id("Pendulum-v1"), None);
        assert_eq!(run_id("Pendulum-run"), None);
        assert_eq!(run_id("x-run-4"), None);
    }

    #[test]
    fn first_run_is_one() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("runs");

        let run = output_folder(&parent, "HalfCheetah").unwrap();

        assert_eq!(run, parent.join("HalfCheetah-run1"));
        assert!(run.is_dir());
    }

    #[test]
    fn highest_run_id_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(format!("Hopper-run{}", u64::MAX))).unwrap();

        let res = output_folder(dir.path(), "Hopper");

        assert!(matches!(res, Err(EsrlErr::RunIdsExhausted(_))));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
