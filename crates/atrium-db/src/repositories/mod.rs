pub mod orcid_identity_repository;
