use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid work sync preference: {value} {location}")]
    InvalidWorkSyncPreference {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid profile sync preference: {message} {location}")]
    InvalidProfileSyncPreference {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
