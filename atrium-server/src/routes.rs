use crate::api::orcid_identities::orcid_identities::{
    create_orcid_identity, destroy_orcid_identity, update_orcid_identity,
};
use crate::{AppState, health};

use axum::{
    Router,
    routing::{delete, get, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // ORCID identity endpoints
        .route("/dashboard/orcid/callback", get(create_orcid_identity))
        .route(
            "/dashboard/orcid/identity",
            put(update_orcid_identity).patch(update_orcid_identity),
        )
        .route(
            "/dashboard/orcid/identity/{id}",
            delete(destroy_orcid_identity),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
