/// Defensive resource loading
///
/// Expected failure modes come back as typed results; nothing here unwinds
/// for a missing or malformed file.
pub mod error;
pub mod loader;

pub use error::{LoadError, Result};
pub use loader::{load_json, load_json_as};
