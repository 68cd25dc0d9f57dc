//! Named in-process job queues.
//!
//! A queue is an unbounded channel: `register` creates it and hands the
//! receiving end to whoever runs the worker, `enqueue` is synchronous and
//! fire-and-forget. Enqueueing never waits on the worker.

use crate::{Job, JobError, Metrics, Result as JobResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Arc, RwLock};

use error_location::ErrorLocation;
use log::debug;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Clone, Default)]
pub struct JobQueue {
    queues: Arc<RwLock<HashMap<String, UnboundedSender<Job>>>>,
    metrics: Metrics,
}

impl JobQueue {
    pub fn new() -> Self {
        Self {
            queues: Arc::new(RwLock::new(HashMap::new())),
            metrics: Metrics::new(),
        }
    }

    /// Create the named queue and return its receiving end. Registering an
    /// existing name replaces the queue; jobs already drained by the old
    /// receiver stay with it.
    pub fn register(&self, name: &str) -> UnboundedReceiver<Job> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.queues
            .write()
            .expect("job queue registry lock poisoned")
            .insert(name.to_string(), tx);
        rx
    }

    /// Enqueue one job on the named queue. Returns immediately; the job runs
    /// whenever the queue's worker gets to it.
    pub fn enqueue(&self, name: &str, job: Job) -> JobResult<()> {
        let job_name = job.name();

        let sender = {
            let queues = self
                .queues
                .read()
                .expect("job queue registry lock poisoned");
            queues.get(name).cloned()
        };

        let sender = sender.ok_or_else(|| JobError::UnknownQueue {
            name: name.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        sender.send(job).map_err(|_| JobError::QueueClosed {
            name: name.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!("Enqueued {} on queue '{}'", job_name, name);
        self.metrics.job_enqueued(name, job_name);

        Ok(())
    }
}
