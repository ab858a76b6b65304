//! Error type for the effects this crate constructs itself.
//!
//! User computations choose their own error type; [`EffectError`] is what
//! the filesystem helpers in [`super::file`] fail with, and what a caught
//! panic can be turned into.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of a built-in effect.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::EffectError;
/// use std::io;
///
/// let error = EffectError::io(
///     "open",
///     "missing.txt",
///     io::Error::from(io::ErrorKind::NotFound),
/// );
/// assert_eq!(error.to_string(), "failed to open missing.txt");
/// assert_eq!(error.io_kind(), Some(io::ErrorKind::NotFound));
/// ```
#[derive(Debug, Error)]
pub enum EffectError {
    /// A filesystem operation failed.
    #[error("failed to {operation} {}", path.display())]
    Io {
        /// The operation that failed (`"open"`, `"create"`, ...).
        operation: &'static str,
        /// The path it was applied to.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The computation panicked.
    #[error("computation panicked: {message}")]
    Panicked {
        /// The panic payload, if it was a string.
        message: String,
    },
}

impl EffectError {
    /// An [`EffectError::Io`] for `operation` on `path`.
    pub fn io(operation: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// An [`EffectError::Panicked`] with `message`.
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::Panicked {
            message: message.into(),
        }
    }

    /// The kind of the underlying I/O error, if this is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            Self::Panicked { .. } => None,
        }
    }
}
