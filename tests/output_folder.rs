use std::fs;

use esrl::output::output_folder;

#[test]
fn run_ids_increase() {
    let dir = tempfile::tempdir().unwrap();

    let first = output_folder(dir.path(), "Pendulum-v1").unwrap();
    let second = output_folder(dir.path(), "Pendulum-v1").unwrap();

    assert_eq!(first, dir.path().join("Pendulum-v1-run1"));
    assert_eq!(second, dir.path().join("Pendulum-v1-run2"));
}

#[test]
fn ids_are_shared_between_environments() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("HalfCheetah-v4-run5")).unwrap();

    let run = output_folder(dir.path(), "Hopper-v4").unwrap();

    assert_eq!(run, dir.path().join("Hopper-v4-run6"));
}

#[test]
fn files_and_unparsable_folders_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes-run40"), "not a folder").unwrap();
    fs::create_dir(dir.path().join("tensorboard")).unwrap();
    fs::create_dir(dir.path().join("Ant-v4-run2")).unwrap();

    let run = output_folder(dir.path(), "Ant-v4").unwrap();

    assert_eq!(run, dir.path().join("Ant-v4-run3"));
    assert!(run.is_dir());
}

#[test]
fn parent_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let parent = dir.path().join("nested").join("runs");

    let run = output_folder(&parent, "Walker2d").unwrap();

    assert!(parent.is_dir());
    assert_eq!(run, parent.join("Walker2d-run1"));
}
