//! Client for the external role-management service.
//!
//! Speaks the Keycloak admin REST API: a client-credentials login for a
//! service account, then a realm role-mapping lookup for a username.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod realm_role;
pub(crate) mod service_token;


pub use client::{RoleServiceClient, RoleServiceSettings};
pub use error::{RoleError, Result as RoleErrorResult};
pub use realm_role::{RealmRole, role_set};
pub use service_token::ServiceToken;
