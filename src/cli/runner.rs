//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{JobConfig, LimitsDef};
use crate::error::{Error, Result};
use crate::types::StringMap;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run {
                job,
                max_queries,
                query_json,
                force,
            } => {
                self.run_job(job, *max_queries, query_json.as_deref(), *force)
                    .await
            }
            Commands::Validate { job } => self.validate(job),
        }
    }

    /// Load a job, apply command-line overrides, and drive the capture loop
    async fn run_job(
        &self,
        path: &Path,
        max_queries: Option<u64>,
        query_json: Option<&str>,
        force: bool,
    ) -> Result<()> {
        let mut config = JobConfig::from_path(path)?;

        if force {
            config.output.overwrite_safe_mode = false;
        }
        if let Some(max) = max_queries {
            let mut limits = config.limits.unwrap_or_else(LimitsDef::default);
            limits.max_queries = Some(max);
            config.limits = Some(limits);
        }
        if let Some(json) = query_json {
            config.query.extend(Self::parse_query_json(json)?);
        }

        info!("Loaded job from {}", path.display());

        let mut engine = config.build_engine()?;
        let stats = engine.run().await?;

        let dir = engine
            .writer()
            .output_dir()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());
        println!(
            "Capture complete: {} files, {} bytes in {}ms ({})",
            stats.cycles_completed, stats.bytes_written, stats.duration_ms, dir
        );

        Ok(())
    }

    /// Validate a job definition without side effects
    fn validate(&self, path: &Path) -> Result<()> {
        let config = JobConfig::from_path(path)?;
        config.build_engine()?;

        println!("Job '{}' is valid", path.display());
        Ok(())
    }

    /// Parse inline query parameters from a JSON object of strings
    fn parse_query_json(json: &str) -> Result<StringMap> {
        serde_json::from_str(json).map_err(|e| Error::config(format!("Invalid query JSON: {e}")))
    }
}
