use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, OidcConfig, RoleServiceConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub oidc: OidcConfig,
    pub role_service: RoleServiceConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for OB_CONFIG_DIR env var, else use ./.ob/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: OB_CONFIG_DIR env var > ./.ob/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.oidc.validate()?;
        self.role_service.validate()?;
        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?
                    .join(&self.logging.dir)
                    .join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  oidc: create_unknown_user={}, load_user_roles={}, update_user_data={}",
            self.oidc.create_unknown_user, self.oidc.load_user_roles, self.oidc.update_user_data
        );
        info!(
            "  role_service: {} realm={} client_id={} secret={} timeout={}s",
            self.role_service.base_url,
            self.role_service.realm,
            self.role_service.client_id,
            if self.role_service.client_secret.is_some() {
                "set"
            } else {
                "unset"
            },
            self.role_service.timeout_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("OB_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("OB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("OB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("OB_LOG_FILE", &mut self.logging.file);

        // OIDC
        Self::apply_env_bool(
            "OIDC_CREATE_UNKNOWN_USER",
            &mut self.oidc.create_unknown_user,
        );
        Self::apply_env_string("LOAD_USER_ROLES", &mut self.oidc.load_user_roles);
        Self::apply_env_string("UPDATE_USER_DATA", &mut self.oidc.update_user_data);

        // Role service
        Self::apply_env_string("OB_ROLE_SERVICE_URL", &mut self.role_service.base_url);
        Self::apply_env_string("OB_ROLE_SERVICE_REALM", &mut self.role_service.realm);
        Self::apply_env_string(
            "OB_ROLE_SERVICE_CLIENT_ID",
            &mut self.role_service.client_id,
        );
        Self::apply_env_option_string(
            "OB_ROLE_SERVICE_CLIENT_SECRET",
            &mut self.role_service.client_secret,
        );
        Self::apply_env_parse(
            "OB_ROLE_SERVICE_TIMEOUT_SECS",
            &mut self.role_service.timeout_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1"/"false"/"0")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = matches!(val.to_lowercase().as_str(), "true" | "1");
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
