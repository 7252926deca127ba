//! Reconciles verified OIDC identities with local user accounts.
//!
//! The flow per authentication: resolve the username from claims, upsert or
//! look up the local user, fetch realm roles from the role service, derive
//! privilege flags, run the configured hooks and save once.

pub mod authentication_backend;
pub mod error;
pub mod hooks;
pub mod identity_reconciler;
pub mod reconciler_settings;
pub mod role_service;
pub mod user_store;

#[cfg(test)]
mod tests;

pub use authentication_backend::AuthenticationBackend;
pub use error::{AuthError, Result};
pub use hooks::{HookRegistry, Hooks, LoadUserRolesFn, NOOP_HOOK, UpdateUserDataFn};
pub use identity_reconciler::IdentityReconciler;
pub use reconciler_settings::ReconcilerSettings;
pub use role_service::RoleService;
pub use user_store::UserStore;

/// Message returned when auto-creation is off and the user is unknown
pub const USER_NOT_FOUND_MESSAGE: &str = "Invalid Authorization header. User not found.";
