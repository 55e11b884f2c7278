//! Structured error types for dataset loading.
//!
//! Two tiers with different propagation rules:
//! - [`LoadError`] is fatal — the dashboard has no degraded mode for a
//!   missing or malformed dataset, so the load aborts.
//! - [`ParseError`] is a single-field coercion failure. It never escapes the
//!   loader: the offending field becomes a missing value instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing dataset file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset '{dataset}': failed to parse CSV: {message}")]
    Csv { dataset: &'static str, message: String },

    #[error("failed to parse config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("dataset '{dataset}': header mismatch — expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        dataset: &'static str,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("dataset '{dataset}' row {row}: {message}")]
    MalformedRow {
        dataset: &'static str,
        /// 1-based data row number (header excluded).
        row: usize,
        message: String,
    },

    #[error("price dates must be strictly increasing: {prev} is not before {next}")]
    UnorderedDates {
        prev: chrono::NaiveDate,
        next: chrono::NaiveDate,
    },
}

/// A field-level coercion failure. Recovered by the loader, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable numeric field: {raw:?}")]
pub struct ParseError {
    pub raw: String,
}

impl ParseError {
    pub fn new(raw: &str) -> Self {
        Self { raw: raw.to_string() }
    }
}
