// src/progress.rs
use crate::record::Source;

/// Lightweight progress reporting for a batch run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of terms.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One term finished (all adapters queried).
    fn item_done(&mut self, _term: &str) {}

    /// One adapter call for `term` failed and was recorded as empty.
    fn item_failed(&mut self, _term: &str, _source: Source, _msg: &str) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// Reborrow an optional sink for a nested call without giving it away.
pub fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}
