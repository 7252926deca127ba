pub mod error;
pub mod models;
pub mod username;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::identity_claims::IdentityClaims;
pub use models::local_user::LocalUser;
pub use models::privileges::Privileges;
pub use models::profile_update::ProfileUpdate;
pub use models::role_set::RoleSet;
pub use username::{MAX_USERNAME_LENGTH, is_truncated, resolve_username};

/// Claim carrying the subject identifier
pub const SUBJECT_CLAIM: &str = "sub";
/// Claim the local username is derived from
pub const PREFERRED_USERNAME_CLAIM: &str = "preferred_username";

/// First-name claim aliases, lowest precedence first
pub const FIRST_NAME_CLAIMS: [&str; 3] = ["first_name", "given_name", "christian_name"];
/// Last-name claim aliases, lowest precedence first
pub const LAST_NAME_CLAIMS: [&str; 2] = ["family_name", "last_name"];
pub const EMAIL_CLAIM: &str = "email";

pub const ADMIN_ROLE: &str = "admin";
pub const SUPERUSER_ROLE: &str = "superuser";
