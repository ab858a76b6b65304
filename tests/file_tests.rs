#![cfg(feature = "effect")]
//! Filesystem helpers composed with bracket and retry.

use std::fs;
use std::io::ErrorKind;

use kleisli::effect::{EffectError, IOEither, file};
use kleisli::retry::RetryPolicy;
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn directory() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[rstest]
fn copy_file_copies_contents_and_returns_destination(directory: TempDir) {
    let source = directory.path().join("source.txt");
    let destination = directory.path().join("destination.txt");
    fs::write(&source, "abc").unwrap();

    let copied = file::copy_file(&source, &destination).run_unsafe().unwrap();

    assert_eq!(copied, destination);
    assert_eq!(fs::read_to_string(&destination).unwrap(), "abc");
}

#[rstest]
fn copy_file_with_missing_source_never_creates_destination(directory: TempDir) {
    let source = directory.path().join("nope.txt");
    let destination = directory.path().join("destination.txt");

    let outcome = file::copy_file(&source, &destination).run_unsafe();

    assert!(matches!(
        outcome,
        Err(EffectError::Io { operation: "open", ref path, .. }) if *path == source
    ));
    assert!(!destination.exists());
}

#[rstest]
fn copy_file_into_missing_directory_fails_on_create(directory: TempDir) {
    let source = directory.path().join("source.txt");
    fs::write(&source, "abc").unwrap();
    let destination = directory.path().join("missing").join("destination.txt");

    let error = file::copy_file(&source, &destination).run_unsafe().unwrap_err();

    assert!(matches!(error, EffectError::Io { operation: "create", .. }));
    assert_eq!(error.io_kind(), Some(ErrorKind::NotFound));
}

#[rstest]
fn helpers_compose_into_a_pipeline(directory: TempDir) {
    let nested = directory.path().join("a").join("b");
    let original = nested.join("original.txt");
    let backup = nested.join("backup.txt");

    let pipeline = file::mkdir_all(&nested)
        .then(file::write_file(&original, "payload"))
        .then(file::copy_file(&original, &backup))
        .chain_first({
            let original = original.clone();
            move |_| file::remove(original)
        })
        .flat_map(file::read_file);

    assert_eq!(pipeline.run_unsafe().unwrap(), "payload");
    assert!(!original.exists());
}

#[rstest]
fn retrying_waits_for_file_to_appear(directory: TempDir) {
    let target = directory.path().join("late.txt");
    let writer_target = target.clone();

    let io = IOEither::retrying(
        &RetryPolicy::limit_retries(3),
        move |status| {
            let attempt = file::read_file(&writer_target);
            if status.iter_number == 1 {
                file::write_file(&writer_target, "ready").then(attempt)
            } else {
                attempt
            }
        },
        |outcome: &Result<String, EffectError>| {
            outcome
                .as_ref()
                .is_err_and(|error| error.io_kind() == Some(ErrorKind::NotFound))
        },
    );

    assert_eq!(io.run_unsafe().unwrap(), "ready");
}
