pub mod orcid_identities;
pub mod update_orcid_identity_request;
