//! Customization points run after privilege derivation.

use crate::{AuthError, Result as AuthErrorResult};

use ob_core::{IdentityClaims, LocalUser, RoleSet};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name under which the no-op hooks are always registered
pub const NOOP_HOOK: &str = "noop";

/// Extra role processing; may mutate the user
pub type LoadUserRolesFn = Arc<dyn Fn(&mut LocalUser, &RoleSet) + Send + Sync>;
/// Extra profile processing from claims; may mutate the user
pub type UpdateUserDataFn = Arc<dyn Fn(&mut LocalUser, &IdentityClaims) + Send + Sync>;

/// The pair of hooks a reconciler runs, resolved once at construction
#[derive(Clone)]
pub struct Hooks {
    pub load_user_roles: LoadUserRolesFn,
    pub update_user_data: UpdateUserDataFn,
}

impl Hooks {
    pub fn new(load_user_roles: LoadUserRolesFn, update_user_data: UpdateUserDataFn) -> Self {
        Self {
            load_user_roles,
            update_user_data,
        }
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            load_user_roles: Arc::new(|_, _| {}),
            update_user_data: Arc::new(|_, _| {}),
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}

/// Named hooks, looked up by the names given in configuration.
///
/// `noop` is registered for both kinds from the start and can be replaced.
pub struct HookRegistry {
    load_user_roles: HashMap<String, LoadUserRolesFn>,
    update_user_data: HashMap<String, UpdateUserDataFn>,
}

impl HookRegistry {
    pub fn new() -> Self {
        let noop = Hooks::default();

        let mut registry = Self {
            load_user_roles: HashMap::new(),
            update_user_data: HashMap::new(),
        };
        registry
            .load_user_roles
            .insert(NOOP_HOOK.to_string(), noop.load_user_roles);
        registry
            .update_user_data
            .insert(NOOP_HOOK.to_string(), noop.update_user_data);
        registry
    }

    pub fn register_load_user_roles<F>(&mut self, name: impl Into<String>, hook: F) -> &mut Self
    where
        F: Fn(&mut LocalUser, &RoleSet) + Send + Sync + 'static,
    {
        self.load_user_roles.insert(name.into(), Arc::new(hook));
        self
    }

    pub fn register_update_user_data<F>(&mut self, name: impl Into<String>, hook: F) -> &mut Self
    where
        F: Fn(&mut LocalUser, &IdentityClaims) + Send + Sync + 'static,
    {
        self.update_user_data.insert(name.into(), Arc::new(hook));
        self
    }

    #[track_caller]
    pub fn load_user_roles(&self, name: &str) -> AuthErrorResult<LoadUserRolesFn> {
        self.load_user_roles
            .get(name)
            .cloned()
            .ok_or_else(|| AuthError::unknown_hook("load_user_roles", name))
    }

    #[track_caller]
    pub fn update_user_data(&self, name: &str) -> AuthErrorResult<UpdateUserDataFn> {
        self.update_user_data
            .get(name)
            .cloned()
            .ok_or_else(|| AuthError::unknown_hook("update_user_data", name))
    }

    /// Resolve both configured names at once
    #[track_caller]
    pub fn resolve(&self, load_user_roles: &str, update_user_data: &str) -> AuthErrorResult<Hooks> {
        Ok(Hooks::new(
            self.load_user_roles(load_user_roles)?,
            self.update_user_data(update_user_data)?,
        ))
    }

    /// Registered names, sorted, for diagnostics
    pub fn names(&self) -> (Vec<&str>, Vec<&str>) {
        let mut load: Vec<&str> = self.load_user_roles.keys().map(String::as_str).collect();
        let mut update: Vec<&str> = self.update_user_data.keys().map(String::as_str).collect();
        load.sort_unstable();
        update.sort_unstable();
        (load, update)
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
