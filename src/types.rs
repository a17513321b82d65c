//! Common types used throughout trawl
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// Generic key-value map with string keys and JSON values
pub type ValueMap = HashMap<String, JsonValue>;
