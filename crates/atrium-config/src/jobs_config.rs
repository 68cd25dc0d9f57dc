use crate::{ConfigError, ConfigErrorResult, DEFAULT_INGEST_QUEUE_NAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JobsConfig {
    /// Queue the unpublish job is enqueued on
    pub ingest_queue_name: String,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            ingest_queue_name: String::from(DEFAULT_INGEST_QUEUE_NAME),
        }
    }
}

impl JobsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.ingest_queue_name.is_empty() {
            return Err(ConfigError::jobs("jobs.ingest_queue_name must not be empty"));
        }

        Ok(())
    }
}
