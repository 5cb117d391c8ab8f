/// Resource loading error types

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Why a resource failed to load.
///
/// Expected failures (missing file, unreadable file, malformed JSON) are
/// reported through this type; the loader never unwinds for them.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to open {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The path the failed load was attempted on
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::FileNotFound { path } => path,
            LoadError::OpenFailed { path, .. } => path,
            LoadError::ParseFailed { path, .. } => path,
        }
    }
}
