use crate::{CliError, CliErrorResult};

use ob_auth::{AuthenticationBackend, HookRegistry, IdentityReconciler, ReconcilerSettings};
use ob_config::Config;
use ob_core::{IdentityClaims, LocalUser};
use ob_db::{SqlitePool, UserRepository};
use ob_roles::{RoleServiceClient, RoleServiceSettings};

use std::io::Read;
use std::sync::Arc;

use log::debug;
use serde_json::Value;

/// Wired-up store and authentication backend for one process
pub struct App {
    pub repository: UserRepository,
    pub backend: AuthenticationBackend,
}

impl App {
    /// Open the configured database and build the backend
    pub async fn connect(config: &Config, hooks: &HookRegistry) -> CliErrorResult<Self> {
        let pool = ob_db::connect(&config.database_path()?).await?;
        Self::from_pool(config, pool, hooks)
    }

    /// Build the backend over an existing pool.
    ///
    /// Hook names from configuration are resolved here, once.
    pub fn from_pool(
        config: &Config,
        pool: SqlitePool,
        hooks: &HookRegistry,
    ) -> CliErrorResult<Self> {
        let repository = UserRepository::new(pool);

        let role_service = RoleServiceClient::new(RoleServiceSettings {
            base_url: config.role_service.base_url.clone(),
            realm: config.role_service.realm.clone(),
            client_id: config.role_service.client_id.clone(),
            client_secret: config.role_service.client_secret.clone(),
            timeout: config.role_service.timeout(),
        })?;

        let hooks = hooks.resolve(&config.oidc.load_user_roles, &config.oidc.update_user_data)?;
        debug!(
            "Hooks resolved: load_user_roles='{}', update_user_data='{}'",
            config.oidc.load_user_roles, config.oidc.update_user_data
        );

        let reconciler = IdentityReconciler::new(
            Arc::new(repository.clone()),
            Arc::new(role_service),
            ReconcilerSettings {
                create_unknown_user: config.oidc.create_unknown_user,
            },
            hooks,
        );

        Ok(Self {
            repository,
            backend: AuthenticationBackend::new(reconciler),
        })
    }

    pub async fn authenticate(&self, claims: &IdentityClaims) -> CliErrorResult<Option<LocalUser>> {
        Ok(self.backend.authenticate(claims).await?)
    }

    pub async fn user(&self, username: &str) -> CliErrorResult<LocalUser> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| CliError::user_not_found(username))
    }
}

/// Read a JSON claim object from a file path, or stdin for "-"
pub fn read_claims(source: &str) -> CliErrorResult<IdentityClaims> {
    let contents = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::ClaimsIo {
                source_name: "stdin".to_string(),
                source: e,
            })?;
        buffer
    } else {
        std::fs::read_to_string(source).map_err(|e| CliError::ClaimsIo {
            source_name: source.to_string(),
            source: e,
        })?
    };

    parse_claims(&contents)
}

pub fn parse_claims(contents: &str) -> CliErrorResult<IdentityClaims> {
    match serde_json::from_str::<Value>(contents)? {
        Value::Object(map) => Ok(IdentityClaims::new(map)),
        other => Err(CliError::invalid_claims(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
