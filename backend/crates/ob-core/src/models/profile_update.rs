use crate::{
    EMAIL_CLAIM, FIRST_NAME_CLAIMS, IdentityClaims, LAST_NAME_CLAIMS, LocalUser,
    Result as CoreErrorResult,
};

use chrono::{DateTime, Utc};

/// Profile fields extracted from claims.
///
/// `None` means the identity provider withheld the claim; the stored value is
/// left alone on update and defaults to empty on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub last_login: DateTime<Utc>,
}

impl ProfileUpdate {
    #[track_caller]
    pub fn from_claims(claims: &IdentityClaims, now: DateTime<Utc>) -> CoreErrorResult<Self> {
        Ok(Self {
            first_name: claims.text_by_precedence(&FIRST_NAME_CLAIMS)?,
            last_name: claims.text_by_precedence(&LAST_NAME_CLAIMS)?,
            email: claims.text(EMAIL_CLAIM)?,
            last_login: now,
        })
    }

    pub fn apply_to(&self, user: &mut LocalUser) {
        if let Some(ref first_name) = self.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(ref last_name) = self.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(ref email) = self.email {
            user.email = email.clone();
        }
        user.last_login = Some(self.last_login);
    }
}
