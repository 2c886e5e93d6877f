//! The concurrent export pipeline.
//!
//! Derives output paths for a filtered selection, builds export jobs,
//! and drains them through a fixed-size worker pool with run-scoped
//! progress accounting.

pub mod error;
pub mod fs_utils;
pub mod jobs;
pub mod paths;
pub mod pool;
pub mod progress;
pub mod queue;

// Re-export common types
pub use error::{PathCollision, PipelineError, PipelineResult};
pub use fs_utils::prepare_export_dir;
pub use jobs::{build_jobs, Padding};
pub use paths::{sanitize_path, OutputPathBuilder};
pub use pool::{ExportSummary, WorkerPool};
pub use progress::ExportProgress;
pub use queue::TaskQueue;
