pub mod actors;
pub mod api;
pub mod error;
pub mod health;
pub mod jobs;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::UserId,
    notifications,
    orcid_identities::{
        orcid_identities::{create_orcid_identity, destroy_orcid_identity, update_orcid_identity},
        update_orcid_identity_request::UpdateOrcidIdentityRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
