//! FIFO work queue shared by the export workers.

use std::collections::VecDeque;

use clipsift_models::ExportJob;
use tokio::sync::Mutex;

/// A FIFO queue of export jobs.
///
/// The queue is filled completely before any worker starts, so an empty pop
/// always means the batch is drained, never that a producer is still running.
#[derive(Debug)]
pub struct TaskQueue {
    jobs: Mutex<VecDeque<ExportJob>>,
}

impl TaskQueue {
    /// Create a queue holding the given jobs, in order.
    pub fn new(jobs: impl IntoIterator<Item = ExportJob>) -> Self {
        Self {
            jobs: Mutex::new(jobs.into_iter().collect()),
        }
    }

    /// Take the next job, or `None` when the batch is drained.
    pub async fn pop(&self) -> Option<ExportJob> {
        self.jobs.lock().await.pop_front()
    }

    /// Number of jobs still waiting.
    pub async fn len(&self) -> usize {
        self.jobs.lock().await.len()
    }

    /// Whether the queue is drained.
    pub async fn is_empty(&self) -> bool {
        self.jobs.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipsift_models::{ClipRecord, Timestamp};

    fn job(name: &str, sequence_index: usize) -> ExportJob {
        ExportJob {
            clip: ClipRecord {
                name: name.to_string(),
                tag: "raids".to_string(),
                nclip: 1,
                rating: 5,
                duration: 10.0,
                t1: Timestamp::from_seconds(0.0),
                t2: Timestamp::from_seconds(10.0),
                link: "https://example.com/v".to_string(),
            },
            start_secs: 0.0,
            end_secs: 10.0,
            output_path: format!("export/{name}.mp3"),
            sequence_index,
        }
    }

    #[tokio::test]
    async fn pops_in_submission_order() {
        let queue = TaskQueue::new(vec![job("a", 0), job("b", 1), job("c", 2)]);

        assert_eq!(queue.len().await, 3);
        assert_eq!(queue.pop().await.unwrap().clip.name, "a");
        assert_eq!(queue.pop().await.unwrap().clip.name, "b");
        assert_eq!(queue.pop().await.unwrap().clip.name, "c");
        assert!(queue.pop().await.is_none());
        assert!(queue.is_empty().await);
    }

    #[tokio::test]
    async fn empty_queue_pops_none() {
        let queue = TaskQueue::new(Vec::new());
        assert!(queue.pop().await.is_none());
    }
}
