use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing claim '{claim}' {location}")]
    MissingClaim {
        claim: String,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn missing_claim(claim: impl Into<String>) -> Self {
        Self::MissingClaim {
            claim: claim.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_claim(claim: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidClaim {
            claim: claim.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Name of the claim that caused the error
    pub fn claim(&self) -> &str {
        match self {
            Self::MissingClaim { claim, .. } | Self::InvalidClaim { claim, .. } => claim,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
