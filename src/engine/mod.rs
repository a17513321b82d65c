//! Capture engine module
//!
//! Main capture loop orchestration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `CaptureEngine` - Drives the fetch/write/pace cycle
//! - `CycleOutcome` / `CycleReport` - What one cycle produced
//! - `CaptureStats` - Run statistics
//!
//! The engine runs exactly one cycle per [`CaptureEngine::run_once`] call
//! and never decides continuation on its own: the caller tests
//! [`CaptureEngine::should_continue`] before each cycle, or hands the loop
//! to [`CaptureEngine::run`].

mod types;

pub use types::{CaptureStats, CycleOutcome, CycleReport, Stage};

use crate::error::Result;
use crate::http::Fetcher;
use crate::limits::RunLimits;
use crate::output::OutputWriter;
use crate::pace::Pacer;
use crate::pager::Pager;
use crate::types::StringMap;
use std::time::Instant;
use tracing::{debug, info};

/// Capture engine for the paginated fetch-and-archive loop
///
/// One cycle is: pull the next parameter map from the pager, merge it over
/// the static query, fetch, write the raw body, count the query, pace.
/// Any failure propagates immediately; a cycle that failed before its
/// write never advances the query counter.
pub struct CaptureEngine {
    /// Target endpoint
    url: String,
    /// Static query parameters merged into every request
    query: StringMap,
    /// Transport
    fetcher: Box<dyn Fetcher>,
    /// Pagination parameter source
    pager: Pager,
    /// Continuation gate
    limits: RunLimits,
    /// Response persistence
    writer: OutputWriter,
    /// Inter-cycle pacing
    pacer: Pacer,
    /// Current stage
    stage: Stage,
    /// Statistics
    stats: CaptureStats,
}

impl CaptureEngine {
    /// Create a new capture engine
    pub fn new(
        url: impl Into<String>,
        fetcher: impl Fetcher + 'static,
        pager: Pager,
        limits: RunLimits,
        writer: OutputWriter,
    ) -> Self {
        Self {
            url: url.into(),
            query: StringMap::new(),
            fetcher: Box::new(fetcher),
            pager,
            limits,
            writer,
            pacer: Pacer::default(),
            stage: Stage::default(),
            stats: CaptureStats::default(),
        }
    }

    /// Set the pacer
    #[must_use]
    pub fn with_pacer(mut self, pacer: Pacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Set static query parameters sent with every request
    #[must_use]
    pub fn with_query(mut self, query: StringMap) -> Self {
        self.query = query;
        self
    }

    /// The target endpoint
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run statistics
    pub fn stats(&self) -> &CaptureStats {
        &self.stats
    }

    /// The continuation gate
    pub fn limits(&self) -> &RunLimits {
        &self.limits
    }

    /// The output writer
    pub fn writer(&self) -> &OutputWriter {
        &self.writer
    }

    /// Mutable access to the pager, e.g. to end the sequence mid-run
    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    /// Should the caller start another cycle?
    ///
    /// True while the limits are open and the pager has not been exhausted.
    /// [`run_once`](Self::run_once) never checks this itself.
    pub fn should_continue(&self) -> bool {
        self.stage != Stage::Stopped && self.limits.should_continue()
    }

    /// Run one full cycle
    ///
    /// Returns [`CycleOutcome::Exhausted`] when the pager yields nothing;
    /// the engine is then stopped and nothing was fetched, written, counted
    /// or paced. On error the stage resets to idle so the caller may try a
    /// further cycle.
    pub async fn run_once(&mut self) -> Result<CycleOutcome> {
        let outcome = self.cycle().await;
        if outcome.is_err() {
            self.stage = Stage::Idle;
        }
        outcome
    }

    async fn cycle(&mut self) -> Result<CycleOutcome> {
        self.stage = Stage::Fetching;
        let page_params = match self.pager.next() {
            Some(params) => params,
            None => {
                self.stage = Stage::Stopped;
                debug!("Pager exhausted, stopping");
                return Ok(CycleOutcome::Exhausted);
            }
        };

        // Page params win over static query on key collision.
        let mut params = self.query.clone();
        params.extend(page_params);

        let body = self.fetcher.fetch(&self.url, &params).await?;

        self.stage = Stage::Writing;
        let path = self.writer.write(&body)?;

        // The write landed, so the query counts, whatever pacing does next.
        self.limits.record_query();
        self.stats.add_cycle();
        self.stats.add_bytes(body.len() as u64);
        debug!(
            "Cycle {}: wrote {} bytes to {}",
            self.limits.queries(),
            body.len(),
            path.display()
        );

        self.stage = Stage::Pacing;
        self.pacer.pause().await?;

        self.stage = Stage::Idle;
        Ok(CycleOutcome::Fetched(CycleReport {
            params,
            bytes_written: body.len(),
            path,
        }))
    }

    /// Drive cycles until the limits close or the pager runs out
    pub async fn run(&mut self) -> Result<CaptureStats> {
        let start = Instant::now();
        info!("Starting capture: {}", self.url);

        while self.should_continue() {
            if self.run_once().await?.is_exhausted() {
                break;
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        self.stats.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Capture complete: {} cycles, {} bytes in {}ms",
            self.stats.cycles_completed, self.stats.bytes_written, self.stats.duration_ms
        );
        Ok(self.stats.clone())
    }
}
