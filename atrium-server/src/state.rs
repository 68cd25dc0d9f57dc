use atrium_config::FeaturesConfig;
use atrium_jobs::JobQueue;
use atrium_orcid::OrcidClient;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub orcid: Arc<OrcidClient>,
    pub jobs: JobQueue,
    pub features: FeaturesConfig,
}
