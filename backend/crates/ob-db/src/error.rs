use ob_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt user row: {message} {location}")]
    CorruptRow {
        message: String,
        location: ErrorLocation,
    },

    #[error("User not found: {id} {location}")]
    UserNotFound {
        id: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn corrupt_row(message: impl Into<String>) -> Self {
        Self::CorruptRow {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
