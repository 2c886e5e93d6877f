//! Error types for catalog operations.

use clipsift_models::RecordError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Malformed catalog row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid record at data row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: RecordError,
    },

    #[error("Invalid tag pattern '{pattern}': {source}")]
    InvalidTagPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl CatalogError {
    /// Create an invalid-record error for a 1-based data row.
    pub fn invalid_record(row: usize, source: RecordError) -> Self {
        Self::InvalidRecord { row, source }
    }

    /// Create an invalid-tag-pattern error.
    pub fn invalid_tag_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidTagPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
