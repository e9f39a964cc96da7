// src/progress.rs
use crate::loader::Provenance;

/// Lightweight progress reporting used by the catalog load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of tiers that may be tried.
    fn begin(&mut self, _tiers: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once per tier attempted, with whether it was accepted.
    fn tier_done(&mut self, _tier: Provenance, _accepted: bool) {}

    /// Called at the end with the tier that won.
    fn finish(&mut self, _tier: Provenance) {}
}
