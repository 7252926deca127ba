use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ob_config::ConfigError),

    #[error("{0}")]
    Auth(#[from] ob_auth::AuthError),

    #[error("Database error: {0}")]
    Database(#[from] ob_db::DbError),

    #[error("Role service error: {0}")]
    RoleService(#[from] ob_roles::RoleError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read claims from {source_name}: {source}")]
    ClaimsIo {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid claims: {message} {location}")]
    InvalidClaims {
        message: String,
        location: ErrorLocation,
    },

    #[error("User '{username}' not found {location}")]
    UserNotFound {
        username: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    #[track_caller]
    pub fn invalid_claims(message: impl Into<String>) -> Self {
        Self::InvalidClaims {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
