mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod oidc_config;
mod role_service_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use oidc_config::OidcConfig;
pub use role_service_config::RoleServiceConfig;

const CONFIG_DIR_ENV: &str = "OB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ob";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "users.db";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_CREATE_UNKNOWN_USER: bool = true;
/// Hook name that resolves to the built-in no-op
pub const NOOP_HOOK: &str = "noop";

const DEFAULT_ROLE_SERVICE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_ROLE_SERVICE_REALM: &str = "master";
const DEFAULT_ROLE_SERVICE_CLIENT_ID: &str = "oidc-bridge";
const DEFAULT_ROLE_SERVICE_TIMEOUT_SECS: u64 = 10;
const MIN_ROLE_SERVICE_TIMEOUT_SECS: u64 = 1;
const MAX_ROLE_SERVICE_TIMEOUT_SECS: u64 = 300;
