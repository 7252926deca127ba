//! ob - command-line front end for the identity reconciler.
//!
//! Loads configuration, opens the user database and runs one command,
//! producing a JSON value for stdout.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;


pub use app::{App, parse_claims, read_claims};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};

use ob_auth::HookRegistry;
use ob_config::Config;

use serde_json::{Value, json};

/// Run the parsed command against an already loaded, validated config
pub async fn run(command: &Commands, config: &Config, hooks: &HookRegistry) -> CliErrorResult<Value> {
    match command {
        Commands::Authenticate { claims } => {
            let claims = read_claims(claims)?;
            let app = App::connect(config, hooks).await?;
            let user = app.authenticate(&claims).await?;
            Ok(serde_json::to_value(user)?)
        }
        Commands::User { username } => {
            let app = App::connect(config, hooks).await?;
            let user = app.user(username).await?;
            Ok(serde_json::to_value(user)?)
        }
        Commands::CheckConfig => config_summary(config),
    }
}

/// JSON view of the effective configuration, without the client secret
pub fn config_summary(config: &Config) -> CliErrorResult<Value> {
    Ok(json!({
        "config_dir": Config::config_dir()?.display().to_string(),
        "database": config.database_path()?.display().to_string(),
        "oidc": {
            "create_unknown_user": config.oidc.create_unknown_user,
            "load_user_roles": config.oidc.load_user_roles,
            "update_user_data": config.oidc.update_user_data,
        },
        "role_service": {
            "base_url": config.role_service.base_url,
            "realm": config.role_service.realm,
            "client_id": config.role_service.client_id,
            "client_secret_set": config.role_service.client_secret.is_some(),
            "timeout_secs": config.role_service.timeout_secs,
        },
    }))
}
