use std::fmt;

use serde::Deserialize;

/// Bearer token for the role service's admin API.
///
/// Obtained fresh for every authentication attempt and never cached.
#[derive(Clone, Deserialize)]
pub struct ServiceToken {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl ServiceToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_in: None,
        }
    }

    pub fn bearer(&self) -> &str {
        &self.access_token
    }

    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }
}

// Never print the token itself
impl fmt::Debug for ServiceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceToken")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
