//! Shared progress counter with per-job console lines.

use clipsift_models::ExportJob;
use clipsift_media::MediaResult;
use tokio::sync::Mutex;

/// Width the `(done/total)` label is padded to before the message.
const LABEL_WIDTH: usize = 9;

/// Completion counter shared by the export workers.
///
/// The increment and the console line happen under the same lock, so the
/// printed counters are strictly increasing even with many workers finishing
/// at once.
#[derive(Debug)]
pub struct ExportProgress {
    completed: Mutex<usize>,
    total: usize,
    silent: bool,
}

impl ExportProgress {
    /// Create a counter for a batch of `total` jobs.
    pub fn new(total: usize, silent: bool) -> Self {
        Self {
            completed: Mutex::new(0),
            total,
            silent,
        }
    }

    /// Record one finished job and print its outcome line.
    ///
    /// Returns this job's position in completion order, starting at 1.
    pub async fn record(&self, job: &ExportJob, outcome: &MediaResult<()>) -> usize {
        let mut completed = self.completed.lock().await;
        *completed += 1;

        if !self.silent {
            let label = format!(
                "{:<width$}",
                format!("({}/{})", *completed, self.total),
                width = LABEL_WIDTH
            );
            match outcome {
                Ok(()) => println!("{label} {} exported.", job.output_path),
                Err(e) => println!("{label} {} was not exported: {e}", job.output_path),
            }
        }

        *completed
    }

    /// Jobs finished so far.
    pub async fn completed(&self) -> usize {
        *self.completed.lock().await
    }
}
