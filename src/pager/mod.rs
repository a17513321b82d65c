//! Pager module
//!
//! Generates the parameter map for each successive request.
//!
//! # Overview
//!
//! A [`Pager`] is a lazy, unbounded iterator of query-parameter maps. Each
//! element carries the page-size pair plus the pagination pair for the
//! current position, and every call advances the position: cursor mode adds
//! the page size to the cursor, page-number mode adds 1 to the page. The
//! sequence only ends when [`Pager::mark_done`] is called.

use crate::error::{Error, Result};
use crate::types::StringMap;

// ============================================================================
// Paging Mode
// ============================================================================

/// How the pagination value advances between requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    /// Offset-style: the value grows by the page size each request
    /// (`?offset=0&limit=50`, then `?offset=50&limit=50`, ...)
    Cursor,
    /// Page-number style: the value grows by one each request
    /// (`?page=1&per_page=50`, then `?page=2&per_page=50`, ...)
    PageNumber,
}

// ============================================================================
// Pager Config
// ============================================================================

/// Declarative construction surface for a [`Pager`]
///
/// Exactly one of the (`cursor_param`, `cursor_value`) /
/// (`page_param`, `page_value`) pairs must be fully supplied; the
/// (`max_results_param`, `max_results_value`) pair is always required.
/// A half-supplied mode pair is ignored when the other pair is complete.
#[derive(Debug, Clone, Default)]
pub struct PagerConfig {
    /// Query parameter name for the cursor/offset
    pub cursor_param: Option<String>,
    /// Initial cursor/offset value
    pub cursor_value: Option<u64>,
    /// Query parameter name for the page number
    pub page_param: Option<String>,
    /// Initial page number
    pub page_value: Option<u64>,
    /// Query parameter name for the page size
    pub max_results_param: Option<String>,
    /// Page size value
    pub max_results_value: Option<u64>,
}

impl PagerConfig {
    /// Validate the config and build a [`Pager`]
    ///
    /// Fails when both mode pairs are supplied, when neither is fully
    /// supplied, or when the page-size pair is incomplete.
    pub fn build(self) -> Result<Pager> {
        let cursor = match (self.cursor_param, self.cursor_value) {
            (Some(param), Some(value)) => Some((param, value)),
            _ => None,
        };
        let page = match (self.page_param, self.page_value) {
            (Some(param), Some(value)) => Some((param, value)),
            _ => None,
        };

        let (mode, param, value) = match (cursor, page) {
            (Some(_), Some(_)) => {
                return Err(Error::config(
                    "cursor and page-number pagination are mutually exclusive; \
                     supply only one of (cursor_param, cursor_value) / (page_param, page_value)",
                ))
            }
            (Some((param, value)), None) => (PagingMode::Cursor, param, value),
            (None, Some((param, value))) => (PagingMode::PageNumber, param, value),
            (None, None) => {
                return Err(Error::config(
                    "no pagination mode configured; \
                     supply (cursor_param, cursor_value) or (page_param, page_value)",
                ))
            }
        };

        let size_param = self
            .max_results_param
            .ok_or_else(|| Error::missing_field("max_results_param"))?;
        let size_value = self
            .max_results_value
            .ok_or_else(|| Error::missing_field("max_results_value"))?;

        Ok(Pager {
            mode,
            param,
            value,
            size_param,
            size_value,
            done: false,
        })
    }
}

// ============================================================================
// Pager
// ============================================================================

/// Unbounded iterator of per-request query parameters
///
/// Yields `{max_results_param: size} ∪ {param: current value}` with all
/// values stringified, then advances. Advancement is saturating, so the
/// value sequence is monotonically non-decreasing.
#[derive(Debug, Clone)]
pub struct Pager {
    mode: PagingMode,
    param: String,
    value: u64,
    size_param: String,
    size_value: u64,
    done: bool,
}

impl Pager {
    /// Create a cursor-mode pager (offset grows by the page size)
    pub fn cursor(
        cursor_param: impl Into<String>,
        cursor_value: u64,
        max_results_param: impl Into<String>,
        max_results_value: u64,
    ) -> Self {
        Self {
            mode: PagingMode::Cursor,
            param: cursor_param.into(),
            value: cursor_value,
            size_param: max_results_param.into(),
            size_value: max_results_value,
            done: false,
        }
    }

    /// Create a page-number pager (page grows by one)
    pub fn page_number(
        page_param: impl Into<String>,
        page_value: u64,
        max_results_param: impl Into<String>,
        max_results_value: u64,
    ) -> Self {
        Self {
            mode: PagingMode::PageNumber,
            param: page_param.into(),
            value: page_value,
            size_param: max_results_param.into(),
            size_value: max_results_value,
            done: false,
        }
    }

    /// End the sequence; every later `next()` yields `None`
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Has the sequence been ended?
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The paging mode
    pub fn mode(&self) -> PagingMode {
        self.mode
    }

    /// The value the next element will carry
    pub fn current_value(&self) -> u64 {
        self.value
    }

    /// The configured page size
    pub fn page_size(&self) -> u64 {
        self.size_value
    }
}

impl Iterator for Pager {
    type Item = StringMap;

    fn next(&mut self) -> Option<StringMap> {
        if self.done {
            return None;
        }

        let mut params = StringMap::new();
        params.insert(self.size_param.clone(), self.size_value.to_string());
        params.insert(self.param.clone(), self.value.to_string());

        self.value = match self.mode {
            PagingMode::Cursor => self.value.saturating_add(self.size_value),
            PagingMode::PageNumber => self.value.saturating_add(1),
        };

        Some(params)
    }
}
