pub mod identity_claims;
pub mod local_user;
pub mod privileges;
pub mod profile_update;
pub mod role_set;
