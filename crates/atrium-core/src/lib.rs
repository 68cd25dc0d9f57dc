pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::orcid_identity::OrcidIdentity;
pub use models::work::{Creator, Work};
pub use models::work_sync_preference::WorkSyncPreference;

#[cfg(test)]
mod tests;
