use crate::{Job, JobHandler, Metrics};

use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

/// Drain a queue on a background task, one job at a time.
///
/// The worker exits when every sender for the queue is gone. Handler errors
/// are logged and counted; the job is not retried.
pub fn spawn_worker(
    queue: String,
    mut receiver: UnboundedReceiver<Job>,
    handler: Arc<dyn JobHandler>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let metrics = Metrics::new();
        info!("Worker started for queue '{}'", queue);

        while let Some(job) = receiver.recv().await {
            let job_name = job.name();
            debug!("Performing {} from queue '{}'", job_name, queue);

            match handler.perform(job).await {
                Ok(()) => metrics.job_performed(&queue, job_name),
                Err(e) => {
                    error!("Job {} on queue '{}' failed: {}", job_name, queue, e);
                    metrics.job_failed(&queue, job_name);
                }
            }
        }

        info!("Worker stopped for queue '{}'", queue);
    })
}
