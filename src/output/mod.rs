//! Output module
//!
//! Persists raw response bodies to disk, one file per response.
//!
//! # Overview
//!
//! [`OutputWriter`] owns a templated location: folder segments that may
//! carry a `{date}` placeholder and a filename that carries a zero-padded
//! `{index}` placeholder. The folder is resolved once per run (with an
//! optional safe-mode refusal of pre-existing folders); each write lands
//! the raw bytes in the next indexed file.

mod path;
mod writer;

pub use writer::{OutputConfig, OutputWriter};
