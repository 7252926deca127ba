use crate::{
    AuthError, Hooks, ReconcilerSettings, Result as AuthErrorResult, RoleService, UserStore,
};

use ob_core::{
    IdentityClaims, LocalUser, Privileges, ProfileUpdate, RoleSet, is_truncated, resolve_username,
};
use ob_roles::role_set;

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};

/// Maps verified claims onto a persisted local user.
///
/// Holds no per-call state; share one instance across requests.
#[derive(Clone)]
pub struct IdentityReconciler {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleService>,
    settings: ReconcilerSettings,
    hooks: Hooks,
}

impl IdentityReconciler {
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleService>,
        settings: ReconcilerSettings,
        hooks: Hooks,
    ) -> Self {
        Self {
            users,
            roles,
            settings,
            hooks,
        }
    }

    pub fn settings(&self) -> ReconcilerSettings {
        self.settings
    }

    /// Resolve, materialize, privilege and save the user behind `claims`.
    ///
    /// With auto-creation on, roles are fetched before the upsert so a role
    /// service failure leaves the store untouched. With it off, the lookup
    /// runs first and an unknown user fails without contacting the role
    /// service. Exactly one `save` happens on success.
    pub async fn reconcile(&self, claims: &IdentityClaims) -> AuthErrorResult<LocalUser> {
        let preferred_username = claims.preferred_username()?;
        let username = resolve_username(preferred_username);
        if is_truncated(preferred_username) {
            warn!(
                "preferred_username '{}' truncated to '{}'",
                preferred_username, username
            );
        }

        let profile = ProfileUpdate::from_claims(claims, Utc::now())?;

        let (mut user, roles) = if self.settings.create_unknown_user {
            let roles = self.fetch_roles(&username).await?;
            let (user, created) = self.users.update_or_create(&username, &profile).await?;
            if created {
                info!("Created local user '{}' ({})", user.username, user.id);
            } else {
                debug!("Updated local user '{}' ({})", user.username, user.id);
            }
            (user, roles)
        } else {
            let Some(mut user) = self.users.find_by_username(&username).await? else {
                warn!("Rejected login for unknown user '{}'", username);
                return Err(AuthError::user_not_found());
            };
            profile.apply_to(&mut user);
            let roles = self.fetch_roles(&username).await?;
            (user, roles)
        };

        let privileges = Privileges::from_roles(&roles);
        privileges.apply_to(&mut user);
        debug!(
            "User '{}' roles {:?}: is_staff={}, is_superuser={}",
            user.username,
            roles.sorted(),
            privileges.is_staff,
            privileges.is_superuser
        );

        (self.hooks.load_user_roles)(&mut user, &roles);
        (self.hooks.update_user_data)(&mut user, claims);

        self.users.save(&user).await?;

        Ok(user)
    }

    /// Fresh service login plus role lookup; nothing is cached between calls
    async fn fetch_roles(&self, username: &str) -> AuthErrorResult<RoleSet> {
        let token = self.roles.authenticate_service_account().await?;
        let realm_roles = self.roles.get_realm_roles(&token, username).await?;

        Ok(role_set(&realm_roles))
    }
}
