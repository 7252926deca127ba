//! Local application user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user row as owned by the persistence layer.
///
/// The reconciler only ever holds one of these transiently while it applies
/// claims, flags and hooks before handing it back for a single save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUser {
    pub id: Uuid,
    /// At most `MAX_USERNAME_LENGTH` characters, unique
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub last_login: Option<DateTime<Utc>>,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
}

impl LocalUser {
    /// A fresh, unprivileged user with empty profile fields
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            last_login: None,
            is_staff: false,
            is_superuser: false,
            date_joined: Utc::now(),
        }
    }
}
