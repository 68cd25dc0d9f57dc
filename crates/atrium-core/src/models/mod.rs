pub mod orcid_identity;
pub mod work;
pub mod work_sync_preference;
