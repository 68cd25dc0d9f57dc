//! ORCID identity - the persisted link between a local user and an ORCID
//! record, including the tokens from the authorization exchange and the
//! user's sync preferences.

use crate::WorkSyncPreference;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One identity per user; `user_id` carries a UNIQUE constraint in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrcidIdentity {
    /// Row id, assigned by the database on insert
    pub id: i64,
    pub user_id: Uuid,
    /// The ORCID iD (e.g., "0000-0002-1825-0097")
    pub orcid_id: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_expires_at: Option<DateTime<Utc>>,
    pub work_sync_preference: WorkSyncPreference,
    /// Per-field opt-in for profile synchronization
    pub profile_sync_preference: HashMap<String, bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrcidIdentity {
    /// Build a fresh identity from the fields a successful authorization
    /// exchange returns. The row id is assigned by the repository.
    pub fn from_authorization(
        user_id: Uuid,
        orcid_id: String,
        access_token: String,
        refresh_token: Option<String>,
        expires_in_secs: Option<i64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            orcid_id,
            access_token,
            refresh_token,
            token_expires_at: expires_in_secs.map(|s| now + chrono::Duration::seconds(s)),
            work_sync_preference: WorkSyncPreference::default(),
            profile_sync_preference: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether works should be pushed to the ORCID record at all
    pub fn work_sync_enabled(&self) -> bool {
        self.work_sync_preference != WorkSyncPreference::Disabled
    }

    pub fn token_expired(&self, now: DateTime<Utc>) -> bool {
        self.token_expires_at.map(|at| at <= now).unwrap_or(false)
    }
}
