use chrono::{DateTime, Utc};
use ob_core::ProfileUpdate;

/// Profile update carrying every field
pub fn full_profile(now: DateTime<Utc>) -> ProfileUpdate {
    ProfileUpdate {
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        last_login: now,
    }
}

/// Profile update where the identity provider withheld every optional claim
pub fn bare_profile(now: DateTime<Utc>) -> ProfileUpdate {
    ProfileUpdate {
        first_name: None,
        last_name: None,
        email: None,
        last_login: now,
    }
}
