use crate::{Job, Result};

use async_trait::async_trait;

/// Performs jobs drained from a queue by a worker task.
///
/// Delivery is at-least-once: a handler may see a job again after a crash,
/// so implementations should tolerate replays. Errors are logged by the
/// worker and the job is dropped - there is no retry machinery.
#[async_trait]
pub trait JobHandler: Send + Sync {
    async fn perform(&self, job: Job) -> Result<()>;
}
