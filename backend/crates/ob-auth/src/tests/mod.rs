
use crate::{Hooks, IdentityReconciler, ReconcilerSettings, RoleService, UserStore};

use ob_core::{ErrorLocation, IdentityClaims, LocalUser, ProfileUpdate};
use ob_db::{DbError, Result as DbErrorResult};
use ob_roles::{RealmRole, RoleError, RoleErrorResult, ServiceToken};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// In-memory user store keyed by username
#[derive(Default)]
pub(crate) struct FakeUserStore {
    users: Mutex<HashMap<String, LocalUser>>,
    saves: AtomicUsize,
    fail_save: bool,
}

impl FakeUserStore {
    pub(crate) fn failing_save() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }

    pub(crate) fn insert(&self, user: LocalUser) {
        self.users
            .lock()
            .unwrap()
            .insert(user.username.clone(), user);
    }

    pub(crate) fn get(&self, username: &str) -> Option<LocalUser> {
        self.users.lock().unwrap().get(username).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub(crate) fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn update_or_create(
        &self,
        username: &str,
        profile: &ProfileUpdate,
    ) -> DbErrorResult<(LocalUser, bool)> {
        let mut users = self.users.lock().unwrap();
        let created = !users.contains_key(username);
        let user = users
            .entry(username.to_string())
            .or_insert_with(|| LocalUser::new(username));
        profile.apply_to(user);
        Ok((user.clone(), created))
    }

    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<LocalUser>> {
        Ok(self.get(username))
    }

    async fn save(&self, user: &LocalUser) -> DbErrorResult<()> {
        if self.fail_save {
            return Err(DbError::UserNotFound {
                id: user.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.insert(user.clone());
        Ok(())
    }
}

/// Role service returning a fixed, replaceable role list
#[derive(Default)]
pub(crate) struct FakeRoleService {
    roles: Mutex<Vec<String>>,
    fail_status: Option<u16>,
    logins: AtomicUsize,
}

impl FakeRoleService {
    pub(crate) fn with_roles(roles: &[&str]) -> Self {
        let service = Self::default();
        service.set_roles(roles);
        service
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    pub(crate) fn set_roles(&self, roles: &[&str]) {
        *self.roles.lock().unwrap() = roles.iter().map(|r| r.to_string()).collect();
    }

    pub(crate) fn logins(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleService for FakeRoleService {
    async fn authenticate_service_account(&self) -> RoleErrorResult<ServiceToken> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        match self.fail_status {
            Some(status) => Err(RoleError::api_error(status, "unavailable")),
            None => Ok(ServiceToken::new("fake-token")),
        }
    }

    async fn get_realm_roles(
        &self,
        _token: &ServiceToken,
        _username: &str,
    ) -> RoleErrorResult<Vec<RealmRole>> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .map(|name| RealmRole {
                name: name.clone(),
                id: None,
                description: None,
                composite: false,
            })
            .collect())
    }
}

pub(crate) fn reconciler(
    users: &Arc<FakeUserStore>,
    roles: &Arc<FakeRoleService>,
    create_unknown_user: bool,
    hooks: Hooks,
) -> IdentityReconciler {
    IdentityReconciler::new(
        users.clone(),
        roles.clone(),
        ReconcilerSettings {
            create_unknown_user,
        },
        hooks,
    )
}

/// Claims with a subject and the given preferred_username
pub(crate) fn claims_for(username: &str) -> IdentityClaims {
    IdentityClaims::default()
        .with("sub", "5f0c7a4e-3c1b-4f7e-9a51-0d6e2b8c9f10")
        .with("preferred_username", username)
}
