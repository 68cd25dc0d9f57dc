mod orcid_identity;
mod work;
mod work_sync_preference;
