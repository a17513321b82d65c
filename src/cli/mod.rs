//! CLI module
//!
//! Command-line interface for running capture jobs.
//!
//! # Commands
//!
//! - `run` - Execute a capture job from a YAML definition
//! - `validate` - Check a job definition without running it

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
