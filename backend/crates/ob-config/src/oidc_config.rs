use crate::{ConfigError, ConfigErrorResult, DEFAULT_CREATE_UNKNOWN_USER, NOOP_HOOK};

use serde::Deserialize;

/// Reconciliation behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OidcConfig {
    /// Create a local user on first login (`OIDC_CREATE_UNKNOWN_USER`)
    pub create_unknown_user: bool,
    /// Registered name of the role-assignment hook (`LOAD_USER_ROLES`)
    pub load_user_roles: String,
    /// Registered name of the profile-update hook (`UPDATE_USER_DATA`)
    pub update_user_data: String,
}

impl Default for OidcConfig {
    fn default() -> Self {
        Self {
            create_unknown_user: DEFAULT_CREATE_UNKNOWN_USER,
            load_user_roles: String::from(NOOP_HOOK),
            update_user_data: String::from(NOOP_HOOK),
        }
    }
}

impl OidcConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.load_user_roles.trim().is_empty() {
            return Err(ConfigError::oidc("oidc.load_user_roles cannot be empty"));
        }
        if self.update_user_data.trim().is_empty() {
            return Err(ConfigError::oidc("oidc.update_user_data cannot be empty"));
        }
        Ok(())
    }
}
