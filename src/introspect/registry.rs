use anyhow::{Context, Result};

/// A named, tagged callback registered at link time.
///
/// Tags play the role marker attributes play in reflective runtimes: asking
/// for every hook carrying a tag replaces scanning a type's methods for an
/// attribute. Registration happens through [`register_hook!`], so the set is
/// fixed when the binary links and lookup reads static data only.
pub struct GameHook {
    pub name: &'static str,
    pub tag: &'static str,
    pub run: fn() -> Result<()>,
}

impl GameHook {
    pub const fn new(name: &'static str, tag: &'static str, run: fn() -> Result<()>) -> Self {
        Self { name, tag, run }
    }
}

inventory::collect!(GameHook);

/// Iterates every registered hook
pub fn hooks() -> impl Iterator<Item = &'static GameHook> {
    inventory::iter::<GameHook>.into_iter()
}

/// All hooks carrying `tag`, in link order
pub fn hooks_tagged(tag: &str) -> Vec<&'static GameHook> {
    hooks().filter(|hook| hook.tag == tag).collect()
}

/// Runs every hook carrying `tag`, returning how many ran.
///
/// The first failing hook aborts the dispatch and its error is surfaced with
/// the hook's name attached.
pub fn run_tagged(tag: &str) -> Result<usize> {
    let mut ran = 0;
    for hook in hooks_tagged(tag) {
        tracing::debug!(name = hook.name, tag, "running hook");
        (hook.run)().with_context(|| format!("hook '{}' failed", hook.name))?;
        ran += 1;
    }
    Ok(ran)
}

/// Registers a [`GameHook`] under a name and tag.
///
/// ```
/// fn reset_score() -> anyhow::Result<()> {
///     Ok(())
/// }
///
/// ludokit::register_hook!("reset_score", "on_new_game", reset_score);
/// ```
#[macro_export]
macro_rules! register_hook {
    ($name:expr, $tag:expr, $func:path) => {
        $crate::introspect::inventory::submit! {
            $crate::introspect::GameHook::new($name, $tag, $func)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CHECKPOINT_RUNS: AtomicUsize = AtomicUsize::new(0);

    fn record_checkpoint() -> Result<()> {
        CHECKPOINT_RUNS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn corrupt_save() -> Result<()> {
        anyhow::bail!("save slot is corrupt")
    }

    register_hook!("record_checkpoint", "test_checkpoint", record_checkpoint);
    register_hook!("corrupt_save", "test_failing", corrupt_save);

    #[test]
    fn test_tagged_lookup_finds_registration() {
        let found = hooks_tagged("test_checkpoint");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "record_checkpoint");
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        assert!(hooks_tagged("no_such_tag").is_empty());
    }

    #[test]
    fn test_dispatch_runs_matching_hooks() {
        let before = CHECKPOINT_RUNS.load(Ordering::SeqCst);
        let ran = run_tagged("test_checkpoint").expect("Dispatch should succeed");
        assert_eq!(ran, 1);
        assert_eq!(CHECKPOINT_RUNS.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_failing_hook_surfaces_its_name() {
        let err = run_tagged("test_failing").unwrap_err();
        assert!(err.to_string().contains("corrupt_save"));
    }
}
