//! Job construction from selected clip records.

use std::collections::HashMap;

use clipsift_models::{ClipRecord, ExportJob};
use tracing::debug;

use crate::error::{PathCollision, PipelineError, PipelineResult};
use crate::paths::OutputPathBuilder;

/// Extra seconds trimmed around each clip's annotated span.
///
/// The pre-padding is subtracted from `t1` as-is. A pre-padding larger than
/// `t1` produces a negative start time, which is handed to ffmpeg verbatim;
/// ffmpeg treats it as "from the beginning".
#[derive(Debug, Clone, Copy, Default)]
pub struct Padding {
    /// Seconds subtracted from the start of the span.
    pub before: f64,
    /// Seconds added to the end of the span.
    pub after: f64,
}

impl Padding {
    /// Reject negative or non-finite padding values.
    pub fn validate(&self) -> PipelineResult<()> {
        if !self.before.is_finite() || self.before < 0.0 {
            return Err(PipelineError::invalid_padding("pre", self.before));
        }
        if !self.after.is_finite() || self.after < 0.0 {
            return Err(PipelineError::invalid_padding("post", self.after));
        }
        Ok(())
    }
}

/// Build one export job per selected record, in selection order.
///
/// Padding is validated up front so a bad value aborts before any job
/// exists. With `detect_collisions` set, duplicate output paths across the
/// batch are reported as an error instead of silently overwriting each other.
pub fn build_jobs(
    records: &[&ClipRecord],
    paths: &OutputPathBuilder,
    padding: Padding,
    detect_collisions: bool,
) -> PipelineResult<Vec<ExportJob>> {
    padding.validate()?;

    let jobs: Vec<ExportJob> = records
        .iter()
        .enumerate()
        .map(|(sequence_index, clip)| ExportJob {
            clip: (*clip).clone(),
            start_secs: clip.t1.seconds() - padding.before,
            end_secs: clip.t2.seconds() + padding.after,
            output_path: paths.build(clip),
            sequence_index,
        })
        .collect();

    if detect_collisions {
        let collisions = find_collisions(&jobs);
        if !collisions.is_empty() {
            return Err(PipelineError::PathCollisions { collisions });
        }
    }

    debug!(jobs = jobs.len(), "export jobs built");
    Ok(jobs)
}

/// Collect output paths derived by more than one job, in first-occurrence
/// order.
fn find_collisions(jobs: &[ExportJob]) -> Vec<PathCollision> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_path: HashMap<&str, Vec<&str>> = HashMap::new();

    for job in jobs {
        let names = by_path.entry(job.output_path.as_str()).or_default();
        if names.is_empty() {
            order.push(job.output_path.as_str());
        }
        names.push(job.clip.name.as_str());
    }

    order
        .into_iter()
        .filter(|path| by_path[path].len() > 1)
        .map(|path| PathCollision {
            path: path.to_string(),
            clip_names: by_path[path].iter().map(|n| n.to_string()).collect(),
        })
        .collect()
}
