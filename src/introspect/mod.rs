/// Type introspection without runtime reflection
///
/// Enum variants are enumerated through a compile-time catalog; tagged
/// callbacks are collected at link time and queried by tag.
pub mod registry;
pub mod variants;

// The register_hook! expansion needs the inventory macros at a crate-stable path
pub use inventory;

pub use registry::{hooks, hooks_tagged, run_tagged, GameHook};
pub use variants::VariantCatalog;
