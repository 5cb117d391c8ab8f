// Ludokit - support utilities for engine-backed games
//
// This library provides diagnostics (log composition, fatal assertions),
// defensive JSON resource loading, and reflection-free type introspection
// for game code running atop a third-party engine runtime.

pub mod diag;
pub mod introspect;
pub mod math;
pub mod resource;

pub use diag::{assert_invariant, assert_invariant_with, DiagValue};
pub use resource::{load_json, load_json_as, LoadError};
