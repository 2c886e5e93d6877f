//! Error types for the export pipeline.

use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// A derived output path shared by more than one selected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCollision {
    /// The colliding path.
    pub path: String,
    /// Names of the clips that derived it, in submission order.
    pub clip_names: Vec<String>,
}

/// Errors that can occur while preparing an export run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{which} padding must be a non-negative number, got {value}")]
    InvalidPadding { which: &'static str, value: f64 },

    #[error("{} output path(s) derived for more than one clip", collisions.len())]
    PathCollisions { collisions: Vec<PathCollision> },

    #[error("Failed to prepare export directory '{path}': {source}")]
    ExportDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Create an invalid-padding error.
    pub fn invalid_padding(which: &'static str, value: f64) -> Self {
        Self::InvalidPadding { which, value }
    }

    /// Create an export-directory error.
    pub fn export_dir(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::ExportDir {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
