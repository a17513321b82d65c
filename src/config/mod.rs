//! Config module
//!
//! Declarative capture-job definitions parsed from YAML.
//!
//! # Overview
//!
//! The config module provides:
//! - `JobConfig` - Declarative capture job definition
//! - Section types for paging, limits, output, pacing and HTTP
//! - Builders that turn a parsed job into validated runtime components

mod builder;
mod types;

pub use builder::DEFAULT_PAUSE_SECONDS;
pub use types::{HttpDef, JobConfig, LimitsDef, OutputDef, PaceDef, PagingDef};

#[cfg(test)]
mod tests;
