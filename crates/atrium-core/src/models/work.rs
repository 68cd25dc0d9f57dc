//! Work reference - the slice of a repository work the unpublish pipeline
//! needs. Works themselves are owned by the wider platform; this type only
//! travels as a job payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    /// ORCID iD attached to this creator, when known
    #[serde(default)]
    pub orcid_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub creators: Vec<Creator>,
}

impl Work {
    pub fn new(title: String, creators: Vec<Creator>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            creators,
        }
    }

    /// ORCID iDs of all creators that carry one
    pub fn creator_orcid_ids(&self) -> impl Iterator<Item = &str> {
        self.creators
            .iter()
            .filter_map(|c| c.orcid_id.as_deref())
    }
}
