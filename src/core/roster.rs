//! Enrolled-worker collection.
//!
//! The roster exclusively owns the `Worker` records. Workers are enrolled
//! once, never edited, and removed only by bulk clearing. Persistence of the
//! collection is handled by the application layer around these calls.

use crate::errors::{AppError, AppResult};
use crate::models::Worker;

#[derive(Debug, Default)]
pub struct Roster {
    workers: Vec<Worker>,
}

impl Roster {
    pub fn from_workers(workers: Vec<Worker>) -> Self {
        Self { workers }
    }

    /// Enrollment order, which is also the matcher's iteration order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Add a worker. The id must not already be enrolled.
    pub fn enroll(&mut self, worker: Worker) -> AppResult<()> {
        if self.find(&worker.id).is_some() {
            return Err(AppError::DuplicateWorker(worker.id));
        }
        self.workers.push(worker);
        Ok(())
    }

    /// Undo of the last enroll, used when the persistence write fails.
    pub fn rollback_last(&mut self) {
        self.workers.pop();
    }

    pub fn snapshot(&self) -> Vec<Worker> {
        self.workers.clone()
    }

    /// Replace the whole collection (rollback of a failed bulk clear).
    pub fn restore(&mut self, workers: Vec<Worker>) {
        self.workers = workers;
    }

    /// Remove every worker; returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.workers.len();
        self.workers.clear();
        n
    }
}
