use crate::resource::{LoadError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Loads the file at `path` and parses its contents as JSON.
///
/// Missing files, unreadable files, and malformed JSON all come back as
/// [`LoadError`] kinds rather than panics, so callers can branch on the
/// failure. The file handle is released on every exit path.
pub fn load_json(path: impl AsRef<Path>) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let text = read_text(path)?;

    match serde_json::from_str(&text) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), "loaded json resource");
            Ok(value)
        }
        Err(source) => {
            tracing::warn!(path = %path.display(), error = %source, "json parse failed");
            Err(LoadError::ParseFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Typed variant of [`load_json`] for manifest and config structs
pub fn load_json_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = read_text(path)?;

    serde_json::from_str(&text).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "json parse failed");
        LoadError::ParseFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Reads the whole file as text, mapping open and read failures.
///
/// Existence is checked up front so a missing file is distinguishable from
/// one that exists but cannot be opened.
fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "resource file not found");
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "failed to open resource file");
        LoadError::OpenFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}
