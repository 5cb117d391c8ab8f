/// Diagnostics: log-line composition and fatal invariant checks
///
/// Ordinary log lines go to standard output; assertion failures go to the
/// error stream with a captured stack trace before unwinding.
pub mod assert;
pub mod log;
pub mod value;

pub use assert::{assert_invariant, assert_invariant_with, compose_failure_message, NO_MESSAGE};
pub use log::{log, log_separated, render_concat, render_separated, SEPARATOR};
pub use value::DiagValue;

/// Installs the crate's default `tracing` subscriber.
///
/// Intended for binaries embedding the library; calling it twice leaves the
/// first subscriber in place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}
