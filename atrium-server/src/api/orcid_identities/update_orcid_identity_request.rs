use std::collections::HashMap;

use serde::Deserialize;

/// PUT/PATCH body for preference updates. The nested `orcid_identity`
/// object is the allow-list: only these two fields are ever applied.
#[derive(Debug, Deserialize)]
pub struct UpdateOrcidIdentityRequest {
    pub orcid_identity: OrcidIdentityParams,
}

#[derive(Debug, Deserialize)]
pub struct OrcidIdentityParams {
    /// One of "sync_all", "sync_notify", "disabled"
    #[serde(default)]
    pub work_sync_preference: Option<String>,

    /// Open field -> enabled mapping
    #[serde(default)]
    pub profile_sync_preference: Option<HashMap<String, bool>>,
}
