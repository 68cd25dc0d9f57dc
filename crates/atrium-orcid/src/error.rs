use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrcidError {
    #[error("ORCID client credentials are not configured {location}")]
    NotConfigured { location: ErrorLocation },

    #[error("HTTP error talking to ORCID: {source} {location}")]
    Http {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Unexpected ORCID response body: {message} {location}")]
    UnexpectedBody {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for OrcidError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrcidError>;
