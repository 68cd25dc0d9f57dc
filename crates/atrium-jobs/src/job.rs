use atrium_core::Work;

use serde::{Deserialize, Serialize};

/// Everything that can travel through a queue. Payloads are plain data so
/// jobs survive serialization if a queue ever becomes external.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Job {
    /// Tell the identity provider to stop syncing an unpublished work
    UnpublishWork { work: Work },
}

impl Job {
    /// Stable name for logs and metrics
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnpublishWork { .. } => "unpublish_work",
        }
    }
}
