//! FFmpeg invocation for clip export.
//!
//! Argument assembly per output format and the async exporter the worker
//! pool drives, one invocation per job.

pub mod command;
pub mod error;
pub mod exporter;

// Re-export common types
pub use command::FfmpegCommand;
pub use error::{MediaError, MediaResult};
pub use exporter::{check_ffmpeg, ClipExporter, FfmpegExporter};
