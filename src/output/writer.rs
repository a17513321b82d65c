//! Raw response writer
//!
//! Persists each captured response body as its own file under a
//! date-stamped folder.

use super::path::{render_date, render_index, INDEX_PLACEHOLDER};
use crate::error::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Output Config
// ============================================================================

/// Configuration for the output writer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Folder segments, joined with the platform separator; each segment
    /// may contain `{date}`
    folder_path: Vec<String>,
    /// Filename template; must contain `{index}`, may contain `{date}`
    output_name: String,
    /// strftime-style pattern for the `{date}` stamp
    date_format: String,
    /// Zero-pad width for the `{index}` counter
    index_length: usize,
    /// Refuse to reuse a folder that already exists
    overwrite_safe_mode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            folder_path: vec!["captures".to_string(), "{date}".to_string()],
            output_name: "page_{index}.json".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            index_length: 5,
            overwrite_safe_mode: true,
        }
    }
}

impl OutputConfig {
    /// Create a config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the folder segments
    #[must_use]
    pub fn with_folder_path<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folder_path = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Set the filename template
    #[must_use]
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    /// Set the date stamp format
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the index pad width
    #[must_use]
    pub fn with_index_length(mut self, length: usize) -> Self {
        self.index_length = length;
        self
    }

    /// Enable or disable overwrite safe mode
    #[must_use]
    pub fn with_safe_mode(mut self, enabled: bool) -> Self {
        self.overwrite_safe_mode = enabled;
        self
    }

    /// The folder segments
    #[must_use]
    pub fn folder_path(&self) -> &[String] {
        &self.folder_path
    }

    /// The filename template
    #[must_use]
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Is overwrite safe mode on?
    #[must_use]
    pub fn is_safe_mode(&self) -> bool {
        self.overwrite_safe_mode
    }
}

// ============================================================================
// Output Writer
// ============================================================================

/// Writes raw response bodies to disk
///
/// The output folder is resolved once per run: the date stamp is taken at
/// the first resolution and cached, so every file of the run lands in the
/// same folder. The write counter starts at 0, advances only after a
/// successful write, and never resets.
#[derive(Debug)]
pub struct OutputWriter {
    config: OutputConfig,
    resolved_dir: Option<PathBuf>,
    date_stamp: Option<String>,
    index: u64,
}

impl OutputWriter {
    /// Create a writer, validating the config
    ///
    /// Fails when `folder_path` is empty, when `output_name` lacks the
    /// `{index}` placeholder, or when `date_format` is not a valid
    /// strftime pattern.
    pub fn new(config: OutputConfig) -> Result<Self> {
        if config.folder_path.is_empty() {
            return Err(Error::config(
                "output folder_path must have at least one segment",
            ));
        }
        if !config.output_name.contains(INDEX_PLACEHOLDER) {
            return Err(Error::config(format!(
                "output_name '{}' must contain the {INDEX_PLACEHOLDER} placeholder",
                config.output_name
            )));
        }
        if StrftimeItems::new(&config.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::invalid_value(
                "date_format",
                format!("'{}' is not a valid strftime pattern", config.date_format),
            ));
        }

        Ok(Self {
            config,
            resolved_dir: None,
            date_stamp: None,
            index: 0,
        })
    }

    /// Resolve (and create) the output folder for this run
    ///
    /// Renders `{date}` in every segment with the current timestamp, joins
    /// the segments, and creates all intermediate folders. In safe mode a
    /// fully resolved folder that already existed before this call is
    /// refused with [`Error::AlreadyExists`] and nothing is created.
    /// Later calls return the cached path without re-checking.
    pub fn resolve_dir(&mut self) -> Result<PathBuf> {
        if let Some(dir) = &self.resolved_dir {
            return Ok(dir.clone());
        }

        let stamp = Utc::now().format(&self.config.date_format).to_string();
        let mut dir = PathBuf::new();
        for segment in &self.config.folder_path {
            dir.push(render_date(segment, &stamp));
        }

        if self.config.overwrite_safe_mode && dir.exists() {
            return Err(Error::already_exists(dir.display().to_string()));
        }
        fs::create_dir_all(&dir).map_err(|e| Error::write_failed(dir.display().to_string(), e))?;

        self.date_stamp = Some(stamp);
        self.resolved_dir = Some(dir.clone());
        Ok(dir)
    }

    /// Write one response body; returns the path written
    ///
    /// Resolves the folder if needed, renders the filename with the current
    /// counter, writes the bytes as a whole-content overwrite, and then
    /// advances the counter. A failed write leaves the counter untouched.
    pub fn write(&mut self, data: &[u8]) -> Result<PathBuf> {
        let dir = self.resolve_dir()?;
        let stamp = self.date_stamp.clone().unwrap_or_default();

        let name = render_index(&self.config.output_name, self.index, self.config.index_length);
        let name = render_date(&name, &stamp);
        let path = dir.join(name);

        fs::write(&path, data).map_err(|e| Error::write_failed(path.display().to_string(), e))?;
        self.index += 1;
        Ok(path)
    }

    /// Files successfully written so far
    #[must_use]
    pub fn files_written(&self) -> u64 {
        self.index
    }

    /// The resolved output folder, once resolved
    #[must_use]
    pub fn output_dir(&self) -> Option<&Path> {
        self.resolved_dir.as_deref()
    }

    /// The writer's configuration
    #[must_use]
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }
}
