use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors talking to the role service. None of these are retried.
#[derive(Error, Debug)]
pub enum RoleError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Role service error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Subject '{username}' not found in realm '{realm}' {location}")]
    SubjectNotFound {
        username: String,
        realm: String,
        location: ErrorLocation,
    },
}

impl RoleError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        RoleError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        RoleError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        RoleError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the service rejected our credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }
}

impl From<reqwest::Error> for RoleError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RoleError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for RoleError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        RoleError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, RoleError>;
