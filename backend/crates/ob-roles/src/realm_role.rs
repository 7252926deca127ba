use ob_core::RoleSet;

use serde::Deserialize;

/// Realm role representation as returned by the role-mapping endpoint.
/// Only `name` matters here; the rest is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RealmRole {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub composite: bool,
}

/// Collect role names into a `RoleSet`
pub fn role_set(roles: &[RealmRole]) -> RoleSet {
    roles.iter().map(|role| role.name.as_str()).collect()
}
