//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Extracts the authenticated user's ID from the request.
///
/// The platform's front proxy authenticates the session and forwards the
/// user as an `X-User-Id` header; requests without one are rejected.
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "Missing X-User-Id header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let uuid = Uuid::parse_str(header_value).map_err(|_| {
                log::warn!("Invalid UUID in X-User-Id header: {}", header_value);
                ApiError::Unauthorized {
                    message: "Invalid X-User-Id header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            Ok(UserId(uuid))
        }
    }
}
