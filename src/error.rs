//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for hosts file operations.
pub type Result<T> = std::result::Result<T, FocusError>;

/// Errors returned by hosts file and block operations.
#[derive(Debug, Error)]
pub enum FocusError {
    /// Opening, reading, writing or flushing a file failed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A start marker was found without a matching end marker.
    #[error(
        "start marker found at line {line} but no end marker follows it; \
         the hosts file needs to be edited manually"
    )]
    MalformedBlock {
        /// 1-based line number of the start marker.
        line: usize,
    },

    /// The configuration file could not be read or parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

impl FocusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the underlying I/O error is `PermissionDenied`.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied)
    }
}
