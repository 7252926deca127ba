//! ob - OIDC identity reconciler CLI
//!
//! # Examples
//!
//! ```bash
//! # Reconcile a claim set produced by the token validator
//! ob authenticate --claims claims.json --pretty
//!
//! # Same, reading claims from stdin
//! echo '{"sub":"abc","preferred_username":"jdoe"}' | ob authenticate --claims -
//!
//! # Inspect a stored user
//! ob user jdoe
//!
//! # Validate configuration
//! ob check-config
//! ```

use ob_auth::HookRegistry;
use ob_cli::{Cli, CliError, CliErrorResult, logger};
use ob_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = execute(&cli).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(CliError::Auth(e)) => {
            error!("{}", e);
            eprintln!("Error [{}]: {}", e.error_code(), e.user_message());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> CliErrorResult<Value> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    // Deployments add their own named hooks here
    let hooks = HookRegistry::new();

    ob_cli::run(&cli.command, &config, &hooks).await
}
