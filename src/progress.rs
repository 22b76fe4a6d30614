// src/progress.rs
use crate::model::Verdict;
use crate::runner::RunSummary;

/// Lightweight progress reporting for a conversion run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the inputs are open, before the first record.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each routed record; `index` counts from 1 over all records seen.
    fn record_done(&mut self, _index: usize, _verdict: Verdict) {}

    /// Called at the end of a successful run.
    fn finish(&mut self, _summary: &RunSummary) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
