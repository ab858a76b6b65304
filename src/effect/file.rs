//! Filesystem helpers as deferred computations.
//!
//! Every helper returns an [`IOEither`] failing with [`EffectError::Io`];
//! nothing touches the filesystem until the computation is run.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::file;
//!
//! let directory = tempfile::tempdir().unwrap();
//! let source = directory.path().join("source.txt");
//! let target = directory.path().join("target.txt");
//!
//! let copied = file::write_file(&source, "abc")
//!     .then(file::copy_file(&source, &target))
//!     .flat_map(file::read_file);
//!
//! assert_eq!(copied.run_unsafe().unwrap(), "abc");
//! ```

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::control;

use super::error::EffectError;
use super::io_either::IOEither;

/// Opens `path` for reading.
pub fn open(path: impl AsRef<Path>) -> IOEither<EffectError, File> {
    let path = path.as_ref().to_path_buf();
    IOEither::new(move || {
        tracing::debug!(path = %path.display(), "opening file");
        File::open(&path).map_err(|source| EffectError::io("open", &path, source))
    })
}

/// Creates (or truncates) `path` for writing.
pub fn create(path: impl AsRef<Path>) -> IOEither<EffectError, File> {
    let path = path.as_ref().to_path_buf();
    IOEither::new(move || {
        tracing::debug!(path = %path.display(), "creating file");
        File::create(&path).map_err(|source| EffectError::io("create", &path, source))
    })
}

/// Reads `path` as UTF-8.
pub fn read_file(path: impl AsRef<Path>) -> IOEither<EffectError, String> {
    let path = path.as_ref().to_path_buf();
    IOEither::new(move || {
        let mut contents = String::new();
        File::open(&path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|source| EffectError::io("read", &path, source))?;
        tracing::trace!(path = %path.display(), bytes = contents.len(), "read file");
        Ok(contents)
    })
}

/// Writes `contents` to `path`, replacing what was there.
pub fn write_file(
    path: impl AsRef<Path>,
    contents: impl Into<Vec<u8>>,
) -> IOEither<EffectError, ()> {
    let path = path.as_ref().to_path_buf();
    let contents = contents.into();
    IOEither::new(move || {
        tracing::trace!(path = %path.display(), bytes = contents.len(), "writing file");
        File::create(&path)
            .and_then(|mut file| file.write_all(&contents))
            .map_err(|source| EffectError::io("write", &path, source))
    })
}

/// Removes the file at `path`.
pub fn remove(path: impl AsRef<Path>) -> IOEither<EffectError, ()> {
    let path = path.as_ref().to_path_buf();
    IOEither::new(move || {
        tracing::debug!(path = %path.display(), "removing file");
        fs::remove_file(&path).map_err(|source| EffectError::io("remove", &path, source))
    })
}

/// Creates `path` and any missing parents.
pub fn mkdir_all(path: impl AsRef<Path>) -> IOEither<EffectError, ()> {
    let path = path.as_ref().to_path_buf();
    IOEither::new(move || {
        fs::create_dir_all(&path)
            .map_err(|source| EffectError::io("create directory", &path, source))
    })
}

/// Copies `source` to `destination`, succeeding with `destination`.
///
/// The source is opened first, so a missing source fails before the
/// destination is created. Both handles are released whatever the outcome.
pub fn copy_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> IOEither<EffectError, PathBuf> {
    let source_path = source.as_ref().to_path_buf();
    let destination = destination.as_ref().to_path_buf();

    IOEither::bracket(
        open(&source_path),
        move |reader: &mut File| {
            let written = control::bracket(
                create(&destination),
                |writer: &mut File| {
                    io::copy(reader, writer)
                        .map_err(|error| EffectError::io("copy", &source_path, error))
                },
                |writer, _| {
                    writer
                        .sync_all()
                        .map_err(|error| EffectError::io("sync", &destination, error))
                },
            )?;
            tracing::debug!(
                source = %source_path.display(),
                destination = %destination.display(),
                bytes = written,
                "copied file"
            );
            Ok::<_, EffectError>(destination)
        },
        |reader, _| {
            drop(reader);
            Ok::<_, EffectError>(())
        },
    )
}
