use super::actions::Action;
use crate::model::NewTask;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant};

pub type JobId = u64;

/// A submitted task waiting for its commit delay to elapse
#[derive(Debug)]
pub struct ScheduledCommit {
    pub id: JobId,
    pub handle: JoinHandle<()>,
    pub title: String,
    pub scheduled_at: Instant,
    pub delay: Duration,
}

impl ScheduledCommit {
    /// Time left before the commit fires, zero once it is due
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.scheduled_at.elapsed())
    }
}

/// Owns delayed commits.
///
/// Each job sleeps for its delay and then sends [`Action::CommitTask`] back to
/// the event loop, which is the only place the store is mutated. A job stays
/// registered until the loop acknowledges the commit with [`finish`] or it is
/// cancelled, so a commit already sitting in the channel can still be
/// discarded by a cancel.
///
/// [`finish`]: CommitScheduler::finish
pub struct CommitScheduler {
    jobs: HashMap<JobId, ScheduledCommit>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl CommitScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a job that hands `task` back to the event loop after `delay`.
    /// Must be called from within a tokio runtime.
    pub fn schedule_commit(&mut self, task: NewTask, delay: Duration) -> JobId {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let action_sender = self.action_sender.clone();
        let title = task.title.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = action_sender.send(Action::CommitTask { job_id, task });
        });

        self.jobs.insert(
            job_id,
            ScheduledCommit {
                id: job_id,
                handle,
                title,
                scheduled_at: Instant::now(),
                delay,
            },
        );
        job_id
    }

    /// Acknowledge a delivered commit. Returns false when the job was cancelled
    /// in the meantime and the commit must be dropped.
    pub fn finish(&mut self, job_id: JobId) -> bool {
        self.jobs.remove(&job_id).is_some()
    }

    pub fn cancel(&mut self, job_id: JobId) -> bool {
        match self.jobs.remove(&job_id) {
            Some(job) => {
                job.handle.abort();
                true
            }
            None => false,
        }
    }

    /// Cancel every pending commit, returning how many were dropped
    pub fn cancel_all(&mut self) -> usize {
        let count = self.jobs.len();
        for (_, job) in self.jobs.drain() {
            job.handle.abort();
        }
        count
    }

    pub fn pending_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_pending(&self, job_id: JobId) -> bool {
        self.jobs.contains_key(&job_id)
    }

    /// Pending jobs ordered by id
    pub fn pending(&self) -> Vec<&ScheduledCommit> {
        let mut jobs: Vec<_> = self.jobs.values().collect();
        jobs.sort_by_key(|job| job.id);
        jobs
    }
}

impl Drop for CommitScheduler {
    fn drop(&mut self) {
        // A commit must never outlive the form that scheduled it
        self.cancel_all();
    }
}
