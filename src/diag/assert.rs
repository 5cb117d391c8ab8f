use std::backtrace::Backtrace;

/// Message used when an assertion site does not provide one
pub const NO_MESSAGE: &str = "(No message provided)";

/// Checks a development-time invariant with the default message.
///
/// A true condition has no effect. A false condition is fatal: the failure is
/// written to the error stream together with a captured stack trace, then the
/// current operation unwinds. Assertion failures are never silently swallowed.
#[inline]
pub fn assert_invariant(condition: bool) {
    assert_invariant_with(condition, NO_MESSAGE);
}

/// Checks a development-time invariant with a caller-supplied message.
#[inline]
pub fn assert_invariant_with(condition: bool, message: &str) {
    if !condition {
        assertion_failed(message);
    }
}

/// Composes the diagnostic carried by a failed assertion
pub fn compose_failure_message(message: &str) -> String {
    format!("Assertion failed: {}", message)
}

#[cold]
#[inline(never)]
fn assertion_failed(message: &str) -> ! {
    let message = compose_failure_message(message);
    let backtrace = Backtrace::force_capture();
    // Blank lines frame the failure so it stands out in interleaved game logs
    println!();
    eprintln!("{}\nStack trace:", message);
    eprintln!("{}", backtrace);
    println!();
    panic!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_condition_is_a_no_op() {
        assert_invariant(true);
        assert_invariant_with(true, "never shown");
    }

    #[test]
    #[should_panic(expected = "Assertion failed: gold must not go negative")]
    fn test_false_condition_panics_with_composed_message() {
        assert_invariant_with(false, "gold must not go negative");
    }

    #[test]
    #[should_panic(expected = "Assertion failed: (No message provided)")]
    fn test_default_message_is_used_when_none_given() {
        assert_invariant(false);
    }

    #[test]
    fn test_composed_message_is_exact() {
        assert_eq!(
            compose_failure_message("inventory slot out of range"),
            "Assertion failed: inventory slot out of range"
        );
    }

    #[test]
    fn test_forced_backtrace_capture_is_non_empty() {
        let backtrace = Backtrace::force_capture();
        assert!(!backtrace.to_string().is_empty());
    }
}
