use crate::actors::{Actor, ActorEnv};

use atrium_config::FeaturesConfig;
use atrium_jobs::{Job, JobQueue};

use async_trait::async_trait;
use log::{debug, error};

/// Feature flag gating all ORCID synchronization
pub const ORCID_SYNC_FLAG: &str = "orcid_sync";

/// Queues the job that tells the provider to stop syncing a work that is
/// being unpublished. Runs inside the deletion chain and always delegates,
/// flag on or off.
pub struct UnpublishWorkActor {
    next: Box<dyn Actor>,
    features: FeaturesConfig,
    jobs: JobQueue,
    ingest_queue: String,
}

impl UnpublishWorkActor {
    pub fn new(
        next: Box<dyn Actor>,
        features: FeaturesConfig,
        jobs: JobQueue,
        ingest_queue: String,
    ) -> Self {
        Self {
            next,
            features,
            jobs,
            ingest_queue,
        }
    }
}

#[async_trait]
impl Actor for UnpublishWorkActor {
    async fn destroy(&self, env: &ActorEnv) -> bool {
        if self.features.enabled(ORCID_SYNC_FLAG) {
            let job = Job::UnpublishWork {
                work: env.work.clone(),
            };

            // Enqueueing is fire-and-forget; a queue problem must not stop
            // the deletion itself.
            match self.jobs.enqueue(&self.ingest_queue, job) {
                Ok(()) => debug!(
                    "Enqueued unpublish job for work {} on '{}'",
                    env.work.id, self.ingest_queue
                ),
                Err(e) => error!(
                    "Failed to enqueue unpublish job for work {}: {}",
                    env.work.id, e
                ),
            }
        }

        self.next.destroy(env).await
    }
}
