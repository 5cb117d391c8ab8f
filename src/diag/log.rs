use crate::diag::DiagValue;
use std::io::Write;

/// Separator used by [`log_separated`]
pub const SEPARATOR: &str = " | ";

/// Renders values back-to-back with no separator
pub fn render_concat(values: &[DiagValue]) -> String {
    let mut line = String::new();
    for value in values {
        line.push_str(&value.to_string());
    }
    line
}

/// Renders values joined with `" | "`
pub fn render_separated(values: &[DiagValue]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Writes one concatenated line to standard output
pub fn log(values: &[DiagValue]) {
    emit(&render_concat(values));
}

/// Writes one `" | "`-separated line to standard output
pub fn log_separated(values: &[DiagValue]) {
    emit(&render_separated(values));
}

fn emit(line: &str) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    // A broken stdout pipe is not worth unwinding a game over
    let _ = writeln!(handle, "{}", line);
}

/// Composes a log line from 1..N heterogeneous values and writes it with no
/// separator, replacing the fixed-arity overload sets of typical engine
/// print helpers.
///
/// ```
/// ludokit::game_log!("spawned ", 3, " enemies");
/// ```
#[macro_export]
macro_rules! game_log {
    ($($value:expr),+ $(,)?) => {
        $crate::diag::log(&[$($crate::diag::DiagValue::from($value)),+])
    };
}

/// Like [`game_log!`], but joins the rendered values with `" | "`.
///
/// ```
/// ludokit::game_log_sep!(1, 2, 3); // prints "1 | 2 | 3"
/// ```
#[macro_export]
macro_rules! game_log_sep {
    ($($value:expr),+ $(,)?) => {
        $crate::diag::log_separated(&[$($crate::diag::DiagValue::from($value)),+])
    };
}
