use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ROLE_SERVICE_CLIENT_ID, DEFAULT_ROLE_SERVICE_REALM,
    DEFAULT_ROLE_SERVICE_TIMEOUT_SECS, DEFAULT_ROLE_SERVICE_URL, MAX_ROLE_SERVICE_TIMEOUT_SECS,
    MIN_ROLE_SERVICE_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoleServiceConfig {
    pub base_url: String,
    pub realm: String,
    pub client_id: String,
    pub client_secret: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for RoleServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_ROLE_SERVICE_URL),
            realm: String::from(DEFAULT_ROLE_SERVICE_REALM),
            client_id: String::from(DEFAULT_ROLE_SERVICE_CLIENT_ID),
            client_secret: None,
            timeout_secs: DEFAULT_ROLE_SERVICE_TIMEOUT_SECS,
        }
    }
}

impl RoleServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::role_service(format!(
                "role_service.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.realm.trim().is_empty() {
            return Err(ConfigError::role_service(
                "role_service.realm cannot be empty",
            ));
        }

        if self.client_id.trim().is_empty() {
            return Err(ConfigError::role_service(
                "role_service.client_id cannot be empty",
            ));
        }

        if !(MIN_ROLE_SERVICE_TIMEOUT_SECS..=MAX_ROLE_SERVICE_TIMEOUT_SECS)
            .contains(&self.timeout_secs)
        {
            return Err(ConfigError::role_service(format!(
                "role_service.timeout_secs must be {}-{}, got {}",
                MIN_ROLE_SERVICE_TIMEOUT_SECS, MAX_ROLE_SERVICE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
