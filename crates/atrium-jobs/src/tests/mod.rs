use crate::{Job, JobError, JobHandler, JobQueue, Result as JobResult, spawn_worker};

use atrium_core::Work;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use googletest::prelude::*;

fn unpublish_job() -> Job {
    Job::UnpublishWork {
        work: Work::new("Moomin".to_string(), vec![]),
    }
}

struct CountingHandler {
    performed: AtomicUsize,
    fail: bool,
}

impl CountingHandler {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            performed: AtomicUsize::new(0),
            fail,
        })
    }
}

#[async_trait]
impl JobHandler for CountingHandler {
    async fn perform(&self, _job: Job) -> JobResult<()> {
        self.performed.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(JobError::perform("boom"));
        }
        Ok(())
    }
}

#[tokio::test]
async fn given_registered_queue_when_enqueued_then_receiver_sees_the_job() {
    let queue = JobQueue::new();
    let mut rx = queue.register("ingest");

    queue.enqueue("ingest", unpublish_job()).unwrap();

    let received = rx.try_recv().unwrap();
    assert_that!(received.name(), eq("unpublish_work"));
    assert_that!(rx.try_recv().is_err(), eq(true));
}

#[tokio::test]
async fn given_unregistered_queue_when_enqueued_then_unknown_queue_error() {
    let queue = JobQueue::new();

    let result = queue.enqueue("ingest", unpublish_job());

    assert_that!(
        matches!(result, Err(JobError::UnknownQueue { .. })),
        eq(true)
    );
}

#[tokio::test]
async fn given_dropped_receiver_when_enqueued_then_queue_closed_error() {
    let queue = JobQueue::new();
    let rx = queue.register("ingest");
    drop(rx);

    let result = queue.enqueue("ingest", unpublish_job());

    assert_that!(matches!(result, Err(JobError::QueueClosed { .. })), eq(true));
}

#[tokio::test]
async fn given_worker_when_jobs_enqueued_then_all_performed() {
    let queue = JobQueue::new();
    let rx = queue.register("ingest");
    let handler = CountingHandler::new(false);
    let worker = spawn_worker("ingest".to_string(), rx, handler.clone());

    queue.enqueue("ingest", unpublish_job()).unwrap();
    queue.enqueue("ingest", unpublish_job()).unwrap();

    // Closing the queue lets the worker drain and exit
    drop(queue);
    worker.await.unwrap();

    assert_that!(handler.performed.load(Ordering::SeqCst), eq(2));
}

#[tokio::test]
async fn given_failing_handler_when_job_errors_then_worker_keeps_draining() {
    let queue = JobQueue::new();
    let rx = queue.register("ingest");
    let handler = CountingHandler::new(true);
    let worker = spawn_worker("ingest".to_string(), rx, handler.clone());

    queue.enqueue("ingest", unpublish_job()).unwrap();
    queue.enqueue("ingest", unpublish_job()).unwrap();

    drop(queue);
    worker.await.unwrap();

    // Both jobs reached the handler despite the first failure
    assert_that!(handler.performed.load(Ordering::SeqCst), eq(2));
}
