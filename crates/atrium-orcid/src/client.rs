//! HTTP client for the ORCID provider: the OAuth2 authorization-code
//! exchange and the member-API call the unpublish job makes.

use crate::{OrcidError, Result as OrcidResult};

use atrium_config::OrcidConfig;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct OrcidClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    token_url: String,
    api_url: String,
}

/// Token fields the provider returns on a granted exchange
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthorizationGrant {
    /// The ORCID iD the user authorized
    pub orcid: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Seconds until the access token expires
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeOutcome {
    Authorized(AuthorizationGrant),
    /// The provider answered with a non-success status; `error` is its
    /// machine-readable error code when the body carried one.
    Rejected { error: Option<String> },
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: Option<String>,
}

impl OrcidClient {
    /// Credentials and endpoints come from configuration at construction
    /// time; nothing is read from the environment per call.
    pub fn new(config: &OrcidConfig) -> OrcidResult<Self> {
        let client_id = config
            .client_id
            .clone()
            .ok_or_else(|| OrcidError::NotConfigured {
                location: ErrorLocation::from(Location::caller()),
            })?;
        let client_secret = config
            .client_secret
            .clone()
            .ok_or_else(|| OrcidError::NotConfigured {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            client_id,
            client_secret,
            token_url: config.token_url.clone(),
            api_url: config.api_url.clone(),
        })
    }

    /// Exchange an authorization code for tokens.
    ///
    /// A provider refusal (non-2xx) is a normal outcome, not an error;
    /// transport failures and unreadable 2xx bodies are errors.
    pub async fn exchange_code(&self, code: &str) -> OrcidResult<ExchangeOutcome> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
        ];

        let resp = self
            .http
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            let grant: AuthorizationGrant =
                serde_json::from_str(&body).map_err(|e| OrcidError::UnexpectedBody {
                    message: format!("token response is not valid JSON: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            debug!("Authorization granted for ORCID iD {}", grant.orcid);
            Ok(ExchangeOutcome::Authorized(grant))
        } else {
            // Error bodies are best-effort JSON; a missing or unreadable
            // `error` field is reported as absent.
            let error = serde_json::from_str::<ProviderErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            debug!(
                "Authorization rejected with status {} error {:?}",
                status, error
            );
            Ok(ExchangeOutcome::Rejected { error })
        }
    }

    /// Tell the provider to stop syncing a work against an ORCID record.
    pub async fn halt_work_sync(
        &self,
        orcid_id: &str,
        access_token: &str,
        work_id: Uuid,
    ) -> OrcidResult<()> {
        let url = format!("{}/{}/work/{}", self.api_url, orcid_id, work_id);

        self.http
            .delete(&url)
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        debug!("Halted work sync for {} on {}", work_id, orcid_id);
        Ok(())
    }
}
