use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Unknown queue: {name} {location}")]
    UnknownQueue {
        name: String,
        location: ErrorLocation,
    },

    #[error("Queue closed: {name} {location}")]
    QueueClosed {
        name: String,
        location: ErrorLocation,
    },

    #[error("Job failed: {message} {location}")]
    Perform {
        message: String,
        location: ErrorLocation,
    },
}

impl JobError {
    /// Create a perform error from any displayable cause
    #[track_caller]
    pub fn perform<S: Into<String>>(message: S) -> Self {
        JobError::Perform {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, JobError>;
