//! Clip export execution.

use crate::command::FfmpegCommand;
use crate::error::{MediaError, MediaResult};
use async_trait::async_trait;
use clipsift_models::{ExportJob, OutputFormat};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Verify ffmpeg is reachable on PATH. Called once before the pool
/// starts rather than once per job.
pub fn check_ffmpeg() -> MediaResult<()> {
    which::which("ffmpeg")
        .map(|_| ())
        .map_err(|_| MediaError::FfmpegNotFound)
}

/// The export seam the worker pool drives: one call per job, returning
/// success or a non-fatal per-job error.
#[async_trait]
pub trait ClipExporter: Send + Sync {
    async fn export(&self, job: &ExportJob) -> MediaResult<()>;
}

/// Exports clips by invoking ffmpeg once per job.
#[derive(Debug, Clone)]
pub struct FfmpegExporter {
    format: OutputFormat,
    normalize_audio: bool,
}

impl FfmpegExporter {
    /// Create an exporter for one run's format and normalization
    /// settings.
    pub fn new(format: OutputFormat, normalize_audio: bool) -> Self {
        if normalize_audio && format != OutputFormat::Mp4 {
            warn!(%format, "audio normalization only applies to mp4 output, ignoring");
        }
        Self {
            format,
            normalize_audio,
        }
    }
}

#[async_trait]
impl ClipExporter for FfmpegExporter {
    /// Run ffmpeg for one job and wait for it to finish; this is the
    /// single blocking point of a worker. The job's time range is used
    /// exactly as computed, negative start included.
    async fn export(&self, job: &ExportJob) -> MediaResult<()> {
        let args = FfmpegCommand::new(
            &job.clip.link,
            &job.output_path,
            job.start_secs,
            job.end_secs,
        )
        .format(self.format)
        .normalize_audio(self.normalize_audio)
        .build_args();

        debug!(
            output = %job.output_path,
            sequence = job.sequence_index,
            span_secs = job.span_secs(),
            "running ffmpeg {}",
            args.join(" ")
        );

        let output = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MediaError::ffmpeg_failed(
                output.status.code(),
                stderr_tail(&stderr, 5),
            ));
        }
        Ok(())
    }
}

/// Last `lines` non-empty lines of ffmpeg's stderr, joined on one line:
/// enough to diagnose a failure without dumping the whole log.
fn stderr_tail(stderr: &str, lines: usize) -> String {
    let kept: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = kept.len().saturating_sub(lines);
    kept[start..].join(" | ")
}
