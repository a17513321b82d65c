//! Job definition types
//!
//! Declarative capture-job types for YAML parsing.

use crate::types::StringMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Job Definition
// ============================================================================

/// Top-level capture job definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JobConfig {
    /// Endpoint URL, queried with GET
    pub url: String,
    /// Static query parameters sent with every request
    #[serde(default)]
    pub query: StringMap,
    /// Pagination configuration
    pub paging: PagingDef,
    /// Run limits; omit the section to get the default budget
    #[serde(default)]
    pub limits: Option<LimitsDef>,
    /// Output configuration
    #[serde(default)]
    pub output: OutputDef,
    /// Pacing; omit the section to get the polite fixed default
    #[serde(default)]
    pub pace: Option<PaceDef>,
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpDef,
}

// ============================================================================
// Paging Definition
// ============================================================================

/// Pagination configuration
///
/// Exactly one of the cursor / page pairs must be fully supplied; the
/// max-results pair is always required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PagingDef {
    /// Query parameter name for the cursor/offset
    #[serde(default)]
    pub cursor_param: Option<String>,
    /// Initial cursor/offset value
    #[serde(default)]
    pub cursor_value: Option<u64>,
    /// Query parameter name for the page number
    #[serde(default)]
    pub page_param: Option<String>,
    /// Initial page number
    #[serde(default)]
    pub page_value: Option<u64>,
    /// Query parameter name for the page size
    #[serde(default)]
    pub max_results_param: Option<String>,
    /// Page size value
    #[serde(default)]
    pub max_results_value: Option<u64>,
}

// ============================================================================
// Limits Definition
// ============================================================================

/// Run limit configuration
///
/// An empty section means unbounded on both axes, as written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LimitsDef {
    /// Maximum number of queries
    #[serde(default)]
    pub max_queries: Option<u64>,
    /// Wall-clock deadline (RFC 3339)
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

// ============================================================================
// Output Definition
// ============================================================================

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputDef {
    /// Folder segments; each may contain `{date}`
    #[serde(default = "default_folder_path")]
    pub folder_path: Vec<String>,
    /// Filename template; must contain `{index}`
    #[serde(default = "default_output_name")]
    pub output_name: String,
    /// strftime-style pattern for `{date}`
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Zero-pad width for `{index}`
    #[serde(default = "default_index_length")]
    pub index_length: usize,
    /// Refuse to reuse an existing output folder
    #[serde(default = "default_true")]
    pub overwrite_safe_mode: bool,
}

impl Default for OutputDef {
    fn default() -> Self {
        Self {
            folder_path: default_folder_path(),
            output_name: default_output_name(),
            date_format: default_date_format(),
            index_length: default_index_length(),
            overwrite_safe_mode: default_true(),
        }
    }
}

fn default_folder_path() -> Vec<String> {
    vec!["captures".to_string(), "{date}".to_string()]
}

fn default_output_name() -> String {
    "page_{index}.json".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_index_length() -> usize {
    5
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Pace Definition
// ============================================================================

/// Pacing configuration
///
/// `pause_seconds` and `requests_per_second` are mutually exclusive. An
/// empty section means no pacing, as written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaceDef {
    /// Fixed sleep after each cycle, in seconds
    #[serde(default)]
    pub pause_seconds: Option<f64>,
    /// Steady-state request rate
    #[serde(default)]
    pub requests_per_second: Option<u32>,
    /// Burst capacity for the rate limiter
    #[serde(default)]
    pub burst: Option<u32>,
}

// ============================================================================
// HTTP Definition
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpDef {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Headers sent with every request
    #[serde(default)]
    pub headers: StringMap,
}

impl Default for HttpDef {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: None,
            headers: StringMap::new(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
