mod identity_claims;
mod privileges;
mod profile_update;
