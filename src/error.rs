//! Error types for map generation

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generation run.
///
/// Unresolved country identifiers are not errors; they end up in the
/// run report instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Input SVG does not exist
    #[error("the file '{}' was not found", path.display())]
    NotFound { path: PathBuf },

    /// Input is not well-formed XML
    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// Any other read or write failure
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
