//! Verified identity-token claims.

use crate::{CoreError, PREFERRED_USERNAME_CLAIM, Result as CoreErrorResult, SUBJECT_CLAIM};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim set received from the OIDC validation layer.
///
/// Signature, issuer and expiry checks have already passed by the time one of
/// these exists; this type only answers questions about claim presence and
/// values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityClaims(Map<String, Value>);

impl IdentityClaims {
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    /// Builder-style insert, mostly useful for tests and fixtures
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether the subject identifier is present
    pub fn has_subject(&self) -> bool {
        self.contains(SUBJECT_CLAIM)
    }

    /// The `preferred_username` claim, which must be a non-empty string
    #[track_caller]
    pub fn preferred_username(&self) -> CoreErrorResult<&str> {
        match self.0.get(PREFERRED_USERNAME_CLAIM) {
            None => Err(CoreError::missing_claim(PREFERRED_USERNAME_CLAIM)),
            Some(Value::String(s)) if s.is_empty() => Err(CoreError::invalid_claim(
                PREFERRED_USERNAME_CLAIM,
                "cannot be empty",
            )),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(CoreError::invalid_claim(
                PREFERRED_USERNAME_CLAIM,
                "must be a string",
            )),
        }
    }

    /// Text value of a profile claim.
    ///
    /// Absent claims yield `None`. Numbers and booleans are rendered as their
    /// JSON text; null, arrays and objects are rejected.
    #[track_caller]
    pub fn text(&self, name: &str) -> CoreErrorResult<Option<String>> {
        match self.0.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
            Some(Value::Null) => Err(CoreError::invalid_claim(name, "cannot be null")),
            Some(_) => Err(CoreError::invalid_claim(name, "must be a scalar value")),
        }
    }

    /// Last present alias wins; `aliases` is ordered lowest precedence first
    #[track_caller]
    pub fn text_by_precedence(&self, aliases: &[&str]) -> CoreErrorResult<Option<String>> {
        let mut resolved = None;
        for alias in aliases {
            if let Some(value) = self.text(alias)? {
                resolved = Some(value);
            }
        }
        Ok(resolved)
    }
}

impl From<Map<String, Value>> for IdentityClaims {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}
