//! ORCID identity REST handlers
//!
//! The authorization-code callback plus the two preference actions. All
//! three answer the browser with a redirect carrying a notification; only
//! parameter and ownership problems surface as HTTP error statuses.

use crate::{ApiError, ApiResult, UpdateOrcidIdentityRequest, UserId, notifications};
use crate::{AppState, notifications::PROFILE_PATH};

use atrium_core::{OrcidIdentity, WorkSyncPreference};
use atrium_db::OrcidIdentityRepository;
use atrium_orcid::{ExchangeOutcome, OrcidError};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Redirect,
};
use chrono::Utc;
use error_location::ErrorLocation;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /dashboard/orcid/callback
///
/// Landing point of the provider's OAuth redirect: exchanges the
/// authorization code for tokens and attaches the identity to the
/// current user.
pub async fn create_orcid_identity(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Query(params): Query<CallbackParams>,
) -> ApiResult<Redirect> {
    let code = params.code.ok_or_else(|| ApiError::BadRequest {
        message: "Missing required parameter: code".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match state.orcid.exchange_code(&code).await {
        Ok(ExchangeOutcome::Authorized(grant)) => {
            let identity = OrcidIdentity::from_authorization(
                user_id,
                grant.orcid,
                grant.access_token,
                grant.refresh_token,
                grant.expires_in,
            );

            let repo = OrcidIdentityRepository::new(state.pool.clone());
            let stored = repo.upsert(&identity).await?;

            log::info!(
                "Connected ORCID iD {} for user {}",
                stored.orcid_id,
                user_id
            );
            Ok(notifications::notice_redirect(
                PROFILE_PATH,
                "ORCID account connected.",
            ))
        }
        Ok(ExchangeOutcome::Rejected { error }) => {
            let error = error.unwrap_or_else(|| "unknown error".to_string());
            log::warn!("ORCID authorization rejected for user {}: {}", user_id, error);
            Ok(notifications::error_redirect(
                PROFILE_PATH,
                &format!("Unable to connect ORCID account: {}", error),
            ))
        }
        // An unreadable 2xx body is reported to the user rather than
        // surfaced as a server failure.
        Err(OrcidError::UnexpectedBody { message, .. }) => {
            log::warn!("ORCID token response unreadable for user {}: {}", user_id, message);
            Ok(notifications::error_redirect(
                PROFILE_PATH,
                "Unable to connect ORCID account: unexpected response from provider",
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// PUT/PATCH /dashboard/orcid/identity
///
/// Apply the allow-listed sync preferences to the current user's identity.
/// Validation problems come back as a notification, not an error status.
pub async fn update_orcid_identity(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    headers: HeaderMap,
    Json(req): Json<UpdateOrcidIdentityRequest>,
) -> ApiResult<Redirect> {
    let back = notifications::back_path(&headers);

    let repo = OrcidIdentityRepository::new(state.pool.clone());
    let Some(mut identity) = repo.find_by_user(user_id).await? else {
        return Ok(notifications::error_redirect(
            &back,
            "Unable to update ORCID preferences.",
        ));
    };

    if let Some(ref value) = req.orcid_identity.work_sync_preference {
        match WorkSyncPreference::from_str(value) {
            Ok(preference) => identity.work_sync_preference = preference,
            Err(e) => {
                log::warn!("Rejected work_sync_preference for user {}: {}", user_id, e);
                return Ok(notifications::error_redirect(
                    &back,
                    "Unable to update ORCID preferences.",
                ));
            }
        }
    }

    if let Some(profile) = req.orcid_identity.profile_sync_preference {
        identity.profile_sync_preference = profile;
    }

    identity.updated_at = Utc::now();
    repo.update_preferences(&identity).await?;

    Ok(notifications::notice_redirect(
        &back,
        "ORCID preferences updated.",
    ))
}

/// DELETE /dashboard/orcid/identity/:id
///
/// Disconnect the current user's ORCID account. The lookup is scoped to
/// the requesting user, so someone else's identity id is a 404.
pub async fn destroy_orcid_identity(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Redirect> {
    let repo = OrcidIdentityRepository::new(state.pool.clone());

    let identity = repo
        .find_owned(user_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("ORCID identity {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    repo.delete(identity.id).await?;
    log::info!(
        "Disconnected ORCID iD {} for user {}",
        identity.orcid_id,
        user_id
    );

    Ok(notifications::notice_redirect(
        &notifications::back_path(&headers),
        "ORCID account disconnected.",
    ))
}
