use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How a connected ORCID account mirrors the user's works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkSyncPreference {
    /// Push every published work to the ORCID record
    #[default]
    SyncAll,
    /// Notify the user, let them approve each work
    SyncNotify,
    /// No synchronization
    Disabled,
}

impl WorkSyncPreference {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SyncAll => "sync_all",
            Self::SyncNotify => "sync_notify",
            Self::Disabled => "disabled",
        }
    }
}

impl FromStr for WorkSyncPreference {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "sync_all" => Ok(Self::SyncAll),
            "sync_notify" => Ok(Self::SyncNotify),
            "disabled" => Ok(Self::Disabled),
            _ => Err(CoreError::InvalidWorkSyncPreference {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for WorkSyncPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
