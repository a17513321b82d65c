//! Job assembly
//!
//! Parses job YAML and turns the parsed sections into validated runtime
//! components. Every fail-fast configuration error surfaces either here or
//! in the component constructors this delegates to.

use super::types::JobConfig;
use crate::engine::CaptureEngine;
use crate::error::{Error, Result};
use crate::http::{HttpFetcher, HttpFetcherConfig};
use crate::limits::RunLimits;
use crate::output::{OutputConfig, OutputWriter};
use crate::pace::{Pacer, RateLimitHook};
use crate::pager::{Pager, PagerConfig};
use crate::types::ValueMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Fixed delay applied when the job has no `pace` section
pub const DEFAULT_PAUSE_SECONDS: f64 = 15.0;

const PACE_EXCLUSIVE: &str = "pause_seconds and requests_per_second are mutually exclusive";

impl JobConfig {
    /// Load a job definition from a YAML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read job file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a job definition from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: JobConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse job YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(Error::config("Job url cannot be empty"));
        }
        if let Some(pace) = &self.pace {
            if pace.pause_seconds.is_some() && pace.requests_per_second.is_some() {
                return Err(Error::config(PACE_EXCLUSIVE));
            }
        }
        Ok(())
    }

    /// Build the pager from the paging section
    pub fn build_pager(&self) -> Result<Pager> {
        PagerConfig {
            cursor_param: self.paging.cursor_param.clone(),
            cursor_value: self.paging.cursor_value,
            page_param: self.paging.page_param.clone(),
            page_value: self.paging.page_value,
            max_results_param: self.paging.max_results_param.clone(),
            max_results_value: self.paging.max_results_value,
        }
        .build()
    }

    /// Build the run limits
    ///
    /// `limits` omitted entirely applies the default budget; a present but
    /// empty section is unbounded, as written.
    pub fn build_limits(&self) -> RunLimits {
        match &self.limits {
            Some(def) => RunLimits::new(def.max_queries, def.end_date),
            None => RunLimits::default(),
        }
    }

    /// Build the output writer from the output section
    pub fn build_writer(&self) -> Result<OutputWriter> {
        let config = OutputConfig::new()
            .with_folder_path(self.output.folder_path.clone())
            .with_output_name(self.output.output_name.clone())
            .with_date_format(self.output.date_format.clone())
            .with_index_length(self.output.index_length)
            .with_safe_mode(self.output.overwrite_safe_mode);
        OutputWriter::new(config)
    }

    /// Build the pacer
    ///
    /// `pace` omitted entirely applies the fixed default delay; a present
    /// but empty section is a no-op, as written.
    pub fn build_pacer(&self) -> Result<Pacer> {
        let def = match &self.pace {
            Some(def) => def,
            None => return Ok(Pacer::fixed(DEFAULT_PAUSE_SECONDS)),
        };

        match (def.pause_seconds, def.requests_per_second) {
            (Some(_), Some(_)) => Err(Error::config(PACE_EXCLUSIVE)),
            (Some(seconds), None) => Ok(Pacer::fixed(seconds)),
            (None, Some(rps)) => {
                let hook = RateLimitHook::new(rps, def.burst.unwrap_or(1));
                Ok(Pacer::with_hook(hook, ValueMap::new()))
            }
            (None, None) => Ok(Pacer::no_op()),
        }
    }

    /// Build the HTTP fetcher from the http section
    pub fn build_fetcher(&self) -> HttpFetcher {
        let mut builder =
            HttpFetcherConfig::builder().timeout(Duration::from_secs(self.http.timeout_secs));
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        for (name, value) in &self.http.headers {
            builder = builder.header(name.clone(), value.clone());
        }
        HttpFetcher::with_config(builder.build())
    }

    /// Assemble the full capture engine
    pub fn build_engine(&self) -> Result<CaptureEngine> {
        let engine = CaptureEngine::new(
            self.url.clone(),
            self.build_fetcher(),
            self.build_pager()?,
            self.build_limits(),
            self.build_writer()?,
        )
        .with_pacer(self.build_pacer()?)
        .with_query(self.query.clone());
        Ok(engine)
    }
}
