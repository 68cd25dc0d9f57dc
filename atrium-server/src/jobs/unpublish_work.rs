//! Performs the unpublish job: matches the work's creators against stored
//! ORCID identities and tells the provider to stop syncing the work for
//! each of them.

use atrium_db::OrcidIdentityRepository;
use atrium_jobs::{Job, JobError, JobHandler, Result as JobResult};
use atrium_orcid::OrcidClient;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use sqlx::SqlitePool;

pub struct UnpublishWorkHandler {
    pool: SqlitePool,
    orcid: Arc<OrcidClient>,
}

impl UnpublishWorkHandler {
    pub fn new(pool: SqlitePool, orcid: Arc<OrcidClient>) -> Arc<Self> {
        Arc::new(Self { pool, orcid })
    }
}

#[async_trait]
impl JobHandler for UnpublishWorkHandler {
    async fn perform(&self, job: Job) -> JobResult<()> {
        let Job::UnpublishWork { work } = job;
        let repo = OrcidIdentityRepository::new(self.pool.clone());

        for orcid_id in work.creator_orcid_ids() {
            let identity = repo
                .find_by_orcid(orcid_id)
                .await
                .map_err(|e| JobError::perform(e.to_string()))?;

            let Some(identity) = identity else {
                debug!("No identity for creator ORCID iD {}, skipping", orcid_id);
                continue;
            };

            if !identity.work_sync_enabled() {
                debug!("Sync disabled for ORCID iD {}, skipping", identity.orcid_id);
                continue;
            }

            // One creator's provider failure must not block the others
            if let Err(e) = self
                .orcid
                .halt_work_sync(&identity.orcid_id, &identity.access_token, work.id)
                .await
            {
                error!(
                    "Failed to halt work sync for {} on work {}: {}",
                    identity.orcid_id, work.id, e
                );
            }
        }

        Ok(())
    }
}
