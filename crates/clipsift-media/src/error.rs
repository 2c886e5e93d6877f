//! Error types for media operations.

use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while invoking the transcoder.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("FFmpeg not found in PATH")]
    FfmpegNotFound,

    #[error("FFmpeg failed ({status}): {stderr_tail}")]
    FfmpegFailed {
        status: String,
        stderr_tail: String,
        exit_code: Option<i32>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MediaError {
    /// Create an FFmpeg failure from an exit code and a stderr tail.
    pub fn ffmpeg_failed(exit_code: Option<i32>, stderr_tail: impl Into<String>) -> Self {
        let status = match exit_code {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        };
        Self::FfmpegFailed {
            status,
            stderr_tail: stderr_tail.into(),
            exit_code,
        }
    }
}
