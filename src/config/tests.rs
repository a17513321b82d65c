//! Tests for config module

use super::*;
use crate::engine::Stage;
use crate::pager::PagingMode;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::time::Duration;

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_job() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.url, "https://api.example.com/v1/records");
    assert!(config.query.is_empty());
    assert!(config.limits.is_none());
    assert!(config.pace.is_none());
    assert_eq!(config.output.folder_path, vec!["captures", "{date}"]);
    assert_eq!(config.output.output_name, "page_{index}.json");
    assert_eq!(config.output.date_format, "%Y-%m-%d");
    assert_eq!(config.output.index_length, 5);
    assert!(config.output.overwrite_safe_mode);
    assert_eq!(config.http.timeout_secs, 30);
}

#[test]
fn test_load_full_job() {
    let yaml = r#"
url: https://api.example.com/v1/records
query:
  api_key: abc123
  format: json
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
limits:
  max_queries: 500
  end_date: "2031-06-30T00:00:00Z"
output:
  folder_path:
    - data
    - "{date}"
  output_name: chunk_{index}.json
  date_format: "%Y%m%d"
  index_length: 4
  overwrite_safe_mode: false
pace:
  pause_seconds: 2.5
http:
  timeout_secs: 60
  user_agent: my-app/1.0
  headers:
    Accept: application/json
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.query.get("api_key"), Some(&"abc123".to_string()));
    assert_eq!(config.query.get("format"), Some(&"json".to_string()));

    let limits = config.limits.as_ref().unwrap();
    assert_eq!(limits.max_queries, Some(500));
    assert_eq!(
        limits.end_date,
        Some(Utc.with_ymd_and_hms(2031, 6, 30, 0, 0, 0).unwrap())
    );

    assert_eq!(config.output.folder_path, vec!["data", "{date}"]);
    assert_eq!(config.output.output_name, "chunk_{index}.json");
    assert_eq!(config.output.index_length, 4);
    assert!(!config.output.overwrite_safe_mode);

    assert_eq!(config.pace.as_ref().unwrap().pause_seconds, Some(2.5));

    assert_eq!(config.http.timeout_secs, 60);
    assert_eq!(config.http.user_agent, Some("my-app/1.0".to_string()));
    assert_eq!(
        config.http.headers.get("Accept"),
        Some(&"application/json".to_string())
    );
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_missing_url_rejected() {
    let yaml = r#"
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
"#;

    let err = JobConfig::from_yaml(yaml).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("url"));
}

#[test]
fn test_empty_url_rejected() {
    let yaml = r#"
url: ""
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
"#;

    let err = JobConfig::from_yaml(yaml).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("url cannot be empty"));
}

#[test]
fn test_missing_paging_rejected() {
    let yaml = "url: https://api.example.com/v1/records\n";

    let err = JobConfig::from_yaml(yaml).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("paging"));
}

#[test]
fn test_pace_exclusivity_rejected() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
pace:
  pause_seconds: 2.0
  requests_per_second: 10
"#;

    let err = JobConfig::from_yaml(yaml).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("mutually exclusive"));
}

// ============================================================================
// Limits Building Tests
// ============================================================================

#[test]
fn test_absent_limits_applies_default_budget() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let limits = config.build_limits();
    assert_eq!(limits.max_queries(), Some(crate::limits::DEFAULT_MAX_QUERIES));
    assert!(limits.end_date().is_some());
}

#[test]
fn test_empty_limits_is_unbounded() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
limits: {}
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let limits = config.build_limits();
    assert_eq!(limits.max_queries(), None);
    assert_eq!(limits.end_date(), None);
    assert!(limits.should_continue());
}

#[test]
fn test_limits_with_max_queries_only() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
limits:
  max_queries: 3
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let limits = config.build_limits();
    assert_eq!(limits.max_queries(), Some(3));
    assert_eq!(limits.end_date(), None);
}

// ============================================================================
// Pace Building Tests
// ============================================================================

#[test]
fn test_absent_pace_applies_fixed_default() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let pacer = config.build_pacer().unwrap();
    assert_eq!(pacer.delay(), Some(Duration::from_secs(15)));
}

#[test]
fn test_empty_pace_is_no_op() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
pace: {}
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let pacer = config.build_pacer().unwrap();
    assert!(pacer.is_no_op());
}

#[test]
fn test_fixed_pace() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
pace:
  pause_seconds: 2.5
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let pacer = config.build_pacer().unwrap();
    assert_eq!(pacer.delay(), Some(Duration::from_millis(2500)));
}

#[test]
fn test_rate_limit_pace() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
pace:
  requests_per_second: 10
  burst: 5
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let pacer = config.build_pacer().unwrap();
    assert!(!pacer.is_no_op());
    assert_eq!(pacer.delay(), None);
}

// ============================================================================
// Pager Building Tests
// ============================================================================

#[test]
fn test_build_cursor_pager() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 200
  max_results_param: limit
  max_results_value: 100
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let pager = config.build_pager().unwrap();
    assert_eq!(pager.mode(), PagingMode::Cursor);
    assert_eq!(pager.current_value(), 200);
    assert_eq!(pager.page_size(), 100);
}

#[test]
fn test_build_page_number_pager() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  page_param: page
  page_value: 1
  max_results_param: per_page
  max_results_value: 25
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let pager = config.build_pager().unwrap();
    assert_eq!(pager.mode(), PagingMode::PageNumber);
    assert_eq!(pager.current_value(), 1);
}

#[test]
fn test_build_pager_rejects_both_modes() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  page_param: page
  page_value: 1
  max_results_param: limit
  max_results_value: 100
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let err = config.build_pager().unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("mutually exclusive"));
}

// ============================================================================
// Writer and Engine Building Tests
// ============================================================================

#[test]
fn test_build_writer_rejects_bad_name() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
output:
  output_name: capture.json
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let err = config.build_writer().unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("{index}"));
}

#[test]
fn test_build_fetcher_applies_http_section() {
    let yaml = r#"
url: https://api.example.com/v1/records
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
http:
  timeout_secs: 5
  user_agent: probe/0.2
  headers:
    Accept: application/json
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let fetcher = config.build_fetcher();
    assert_eq!(fetcher.config().timeout, Duration::from_secs(5));
    assert_eq!(fetcher.config().user_agent, "probe/0.2");
    assert_eq!(
        fetcher.config().default_headers.get("Accept"),
        Some(&"application/json".to_string())
    );
}

#[test]
fn test_build_engine_smoke() {
    let yaml = r#"
url: https://api.example.com/v1/records
query:
  api_key: abc123
paging:
  cursor_param: offset
  cursor_value: 0
  max_results_param: limit
  max_results_value: 100
limits:
  max_queries: 500
"#;

    let config = JobConfig::from_yaml(yaml).unwrap();
    let engine = config.build_engine().unwrap();
    assert_eq!(engine.url(), "https://api.example.com/v1/records");
    assert_eq!(engine.limits().max_queries(), Some(500));
    assert_eq!(engine.stage(), Stage::Idle);
    assert!(engine.should_continue());
}
