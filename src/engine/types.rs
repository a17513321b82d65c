//! Engine types
//!
//! Cycle outcomes and statistics for the capture engine.

use crate::types::StringMap;
use std::path::PathBuf;

/// Where the engine is inside a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Between cycles
    #[default]
    Idle,
    /// Waiting for the response
    Fetching,
    /// Persisting the response body
    Writing,
    /// Waiting out the pacer
    Pacing,
    /// The pager is exhausted; no further cycles will run
    Stopped,
}

/// What a single cycle produced
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// One response fetched and written
    Fetched(CycleReport),
    /// The pager yielded nothing; the engine stopped
    Exhausted,
}

impl CycleOutcome {
    /// Check if this cycle fetched a page
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    /// Check if the pager ran out
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// The cycle report, when a page was fetched
    pub fn report(&self) -> Option<&CycleReport> {
        match self {
            Self::Fetched(report) => Some(report),
            Self::Exhausted => None,
        }
    }
}

/// Details of one completed cycle
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// The full query-parameter map that was sent
    pub params: StringMap,
    /// Body bytes written to disk
    pub bytes_written: usize,
    /// The file the body landed in
    pub path: PathBuf,
}

/// Statistics from a capture run
#[derive(Debug, Clone, Default)]
pub struct CaptureStats {
    /// Completed cycles (responses written)
    pub cycles_completed: u64,
    /// Total body bytes written
    pub bytes_written: u64,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl CaptureStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed cycle
    pub fn add_cycle(&mut self) {
        self.cycles_completed += 1;
    }

    /// Add written bytes
    pub fn add_bytes(&mut self, count: u64) {
        self.bytes_written += count;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
