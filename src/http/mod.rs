//! HTTP module
//!
//! The transport seam the capture loop fetches through.
//!
//! # Overview
//!
//! [`Fetcher`] is the seam: one GET-style request in, raw body bytes out.
//! [`HttpFetcher`] is the reqwest-backed implementation. There is no retry
//! logic anywhere in this crate; every failure goes straight back to the
//! caller.

mod client;

pub use client::{Fetcher, HttpFetcher, HttpFetcherConfig, HttpFetcherConfigBuilder};
