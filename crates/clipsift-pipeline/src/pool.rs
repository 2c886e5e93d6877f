//! Fixed-size worker pool draining the task queue.

use std::sync::Arc;

use clipsift_media::ClipExporter;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::progress::ExportProgress;
use crate::queue::TaskQueue;

/// Outcome counts for one export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Jobs that exported successfully.
    pub completed: usize,
    /// Jobs whose export failed.
    pub failed: usize,
}

/// Runs export jobs on a fixed number of concurrent workers.
///
/// Workers pull from the shared queue until it is drained; a failed job is
/// reported and counted but never stops the siblings or the run.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Create a pool with at least one worker.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Number of workers this pool spawns.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Drain the queue and return the aggregated outcome counts.
    ///
    /// Returns once every worker has exited, which with a pre-filled queue
    /// means every job has been attempted.
    pub async fn run(
        &self,
        queue: Arc<TaskQueue>,
        exporter: Arc<dyn ClipExporter>,
        progress: Arc<ExportProgress>,
    ) -> ExportSummary {
        let mut set = JoinSet::new();
        for worker_id in 0..self.workers {
            let queue = Arc::clone(&queue);
            let exporter = Arc::clone(&exporter);
            let progress = Arc::clone(&progress);
            set.spawn(async move { worker_loop(worker_id, queue, exporter, progress).await });
        }

        let mut summary = ExportSummary::default();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(stats) => {
                    summary.completed += stats.completed;
                    summary.failed += stats.failed;
                }
                Err(e) => warn!(error = %e, "export worker panicked"),
            }
        }
        summary
    }
}

/// One worker: pull a job, run it, record the outcome, repeat until the
/// queue is drained.
async fn worker_loop(
    worker_id: usize,
    queue: Arc<TaskQueue>,
    exporter: Arc<dyn ClipExporter>,
    progress: Arc<ExportProgress>,
) -> ExportSummary {
    let mut stats = ExportSummary::default();

    while let Some(job) = queue.pop().await {
        let outcome = exporter.export(&job).await;
        match &outcome {
            Ok(()) => stats.completed += 1,
            Err(e) => {
                warn!(worker_id, clip = %job.clip.name, error = %e, "export failed");
                stats.failed += 1;
            }
        }
        progress.record(&job, &outcome).await;
    }

    debug!(worker_id, completed = stats.completed, failed = stats.failed, "worker done");
    stats
}
