use crate::USER_NOT_FOUND_MESSAGE;

use ob_core::CoreError;
use ob_db::DbError;
use ob_roles::RoleError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication failed: {message} {location}")]
    AuthenticationFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid claims: {source} {location}")]
    InvalidClaims {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Persistence error: {source} {location}")]
    Persistence {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Role service error: {source} {location}")]
    RoleService {
        #[source]
        source: RoleError,
        location: ErrorLocation,
    },

    #[error("Unknown {kind} hook '{name}' {location}")]
    UnknownHook {
        kind: &'static str,
        name: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn user_not_found() -> Self {
        Self::AuthenticationFailed {
            message: USER_NOT_FOUND_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_hook(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownHook {
            kind,
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed { .. } => "AUTHENTICATION_FAILED",
            Self::InvalidClaims { .. } => "INVALID_CLAIMS",
            Self::Persistence { .. } => "PERSISTENCE_ERROR",
            Self::RoleService { .. } => "ROLE_SERVICE_ERROR",
            Self::UnknownHook { .. } => "UNKNOWN_HOOK",
        }
    }

    /// Only an unknown user is reported to the caller verbatim
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }

    /// Text safe to hand back to the authenticating client
    pub fn user_message(&self) -> &str {
        match self {
            Self::AuthenticationFailed { message, .. } => message,
            _ => "Authentication failed.",
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::InvalidClaims {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<RoleError> for AuthError {
    #[track_caller]
    fn from(source: RoleError) -> Self {
        Self::RoleService {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
