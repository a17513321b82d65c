//! # trawl
//!
//! A minimal, Rust-native toolkit for paginated HTTP capture.
//!
//! Point it at an endpoint, describe how the pagination parameters advance,
//! and it walks the pages one GET at a time, writing each raw response body
//! to its own file until the configured limits close the run.
//!
//! ## Features
//!
//! - **Two paging modes**: cursor/offset (grows by the page size) or page
//!   number (grows by one)
//! - **Raw capture**: response bodies land on disk untouched, one indexed
//!   file per page under a date-stamped folder
//! - **Bounded runs**: stop after a query budget, at a wall-clock deadline,
//!   or when the pager is ended mid-run
//! - **Pacing**: a fixed delay between requests, or a custom async hook such
//!   as the provided token-bucket limiter
//! - **Declarative jobs**: the whole loop described in one YAML file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trawl::{CaptureEngine, HttpFetcher, OutputConfig, OutputWriter, Pager, RunLimits, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let writer = OutputWriter::new(OutputConfig::default())?;
//!     let mut engine = CaptureEngine::new(
//!         "https://api.example.com/v1/records",
//!         HttpFetcher::new(),
//!         Pager::cursor("offset", 0, "limit", 50),
//!         RunLimits::default().with_max_queries(10),
//!         writer,
//!     );
//!
//!     let stats = engine.run().await?;
//!     println!("captured {} pages", stats.cycles_completed);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       CaptureEngine                        │
//! │    run_once(): pager → fetch → write → count → pace        │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────┬───────────┬─────┴─────┬───────────┬────────────┐
//! │  Pager   │  Fetcher  │  Output   │  Limits   │   Pacer    │
//! ├──────────┼───────────┼───────────┼───────────┼────────────┤
//! │ Cursor   │ reqwest   │ {date}    │ Query     │ Fixed      │
//! │ PageNum  │ GET only  │ {index}   │ budget    │ Hook       │
//! │ mark_done│ raw bytes │ safe mode │ Deadline  │ Rate limit │
//! └──────────┴───────────┴───────────┴───────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the toolkit
pub mod error;

/// Common type aliases
pub mod types;

/// Pagination parameter sequences
pub mod pager;

/// Run limits: query budget and wall-clock deadline
pub mod limits;

/// Raw response persistence
pub mod output;

/// Inter-request pacing
pub mod pace;

/// HTTP transport
pub mod http;

/// The capture loop
pub mod engine;

/// Declarative YAML job definitions
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::JobConfig;
pub use engine::{CaptureEngine, CaptureStats, CycleOutcome, CycleReport, Stage};
pub use http::{Fetcher, HttpFetcher, HttpFetcherConfig};
pub use limits::RunLimits;
pub use output::{OutputConfig, OutputWriter};
pub use pace::{Pacer, PauseHook, RateLimitHook};
pub use pager::{Pager, PagerConfig, PagingMode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
