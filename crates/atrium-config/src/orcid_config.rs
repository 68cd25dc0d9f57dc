use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_TOKEN_URL, MAX_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

/// ORCID provider settings. The client credentials are secrets and are
/// normally supplied through the ORCID_CLIENT_ID / ORCID_CLIENT_SECRET
/// environment variables rather than config.toml.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrcidConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// OAuth2 token endpoint for the authorization-code exchange
    pub token_url: String,
    /// Member API base URL
    pub api_url: String,
    /// Bound on every outbound call to the provider
    pub request_timeout_secs: u64,
}

impl Default for OrcidConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            token_url: String::from(DEFAULT_TOKEN_URL),
            api_url: String::from(DEFAULT_API_URL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl OrcidConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_url.is_empty() {
            return Err(ConfigError::orcid("orcid.token_url must not be empty"));
        }

        if self.api_url.is_empty() {
            return Err(ConfigError::orcid("orcid.api_url must not be empty"));
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::orcid(format!(
                "orcid.request_timeout_secs must be 1-{}, got {}",
                MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        // Credentials may legitimately be absent (e.g., a deployment with
        // ORCID disconnected); the client refuses to build without them.
        if self.client_id.is_some() != self.client_secret.is_some() {
            return Err(ConfigError::orcid(
                "orcid.client_id and orcid.client_secret must be configured together",
            ));
        }

        Ok(())
    }
}
