//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginated HTTP capture CLI
#[derive(Parser, Debug)]
#[command(name = "trawl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a capture job
    Run {
        /// Job definition file (YAML)
        #[arg(short, long)]
        job: PathBuf,

        /// Override the maximum number of queries
        #[arg(long)]
        max_queries: Option<u64>,

        /// Extra static query parameters (JSON object of strings)
        #[arg(long)]
        query_json: Option<String>,

        /// Disable overwrite safe mode for this run
        #[arg(long)]
        force: bool,
    },

    /// Validate a job definition without running it
    Validate {
        /// Job definition file (YAML)
        #[arg(short, long)]
        job: PathBuf,
    },
}
