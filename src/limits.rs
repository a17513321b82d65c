//! Run limits
//!
//! Decides when the capture loop should stop: after a maximum number of
//! queries, past a wall-clock deadline, or both. The check is a pure
//! predicate; the query counter is advanced by the engine, and only after
//! a response has been written successfully.

use chrono::{DateTime, Duration, Utc};

/// Default query budget when no limits are given
pub const DEFAULT_MAX_QUERIES: u64 = 1000;

/// Default deadline horizon when no limits are given
pub const DEFAULT_HORIZON_HOURS: i64 = 24;

/// Continuation gate over a query counter and the wall clock
///
/// `None` for `max_queries` means unbounded; `None` for `end_date` means
/// no deadline. With both unset the gate never closes, so the caller must
/// stop the run some other way (for example [`crate::Pager::mark_done`]).
#[derive(Debug, Clone)]
pub struct RunLimits {
    max_queries: Option<u64>,
    end_date: Option<DateTime<Utc>>,
    queries: u64,
}

impl RunLimits {
    /// Create limits from optional bounds
    pub fn new(max_queries: Option<u64>, end_date: Option<DateTime<Utc>>) -> Self {
        Self {
            max_queries,
            end_date,
            queries: 0,
        }
    }

    /// Limits that never close the gate
    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Set the maximum query count
    #[must_use]
    pub fn with_max_queries(mut self, max_queries: u64) -> Self {
        self.max_queries = Some(max_queries);
        self
    }

    /// Set the wall-clock deadline
    #[must_use]
    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Should another query be issued?
    ///
    /// Pure: never mutates, safe to call any number of times.
    pub fn should_continue(&self) -> bool {
        if let Some(max) = self.max_queries {
            if self.queries >= max {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if Utc::now() >= end {
                return false;
            }
        }
        true
    }

    /// Count one completed query
    pub fn record_query(&mut self) {
        self.queries += 1;
    }

    /// Queries counted so far
    pub fn queries(&self) -> u64 {
        self.queries
    }

    /// The configured query budget, if any
    pub fn max_queries(&self) -> Option<u64> {
        self.max_queries
    }

    /// The configured deadline, if any
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }
}

impl Default for RunLimits {
    /// A conservative budget: 1000 queries, 24 hours
    fn default() -> Self {
        Self::new(
            Some(DEFAULT_MAX_QUERIES),
            Some(Utc::now() + Duration::hours(DEFAULT_HORIZON_HOURS)),
        )
    }
}
