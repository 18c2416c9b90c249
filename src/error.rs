//! Error types for loading analysis inputs.
//!
//! Conflict analysis itself is infallible: malformed scheduling data is
//! handled by omission. Only reading snapshots and options from outside
//! the process can fail.

use std::path::PathBuf;

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading snapshots or options.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading an input file failed.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was not valid JSON for the expected shape.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
