use crate::{CoreError, IdentityClaims};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_no_preferred_username_when_read_then_missing_claim() {
    let claims = IdentityClaims::default().with("sub", "abc");

    let result = claims.preferred_username();

    assert!(matches!(result, Err(CoreError::MissingClaim { .. })));
    assert_eq!(result.unwrap_err().claim(), "preferred_username");
}

#[test]
fn given_empty_preferred_username_when_read_then_invalid_claim() {
    let claims = IdentityClaims::default().with("preferred_username", "");

    assert!(matches!(
        claims.preferred_username(),
        Err(CoreError::InvalidClaim { .. })
    ));
}

#[test]
fn given_numeric_preferred_username_when_read_then_invalid_claim() {
    let claims = IdentityClaims::default().with("preferred_username", 42);

    assert!(matches!(
        claims.preferred_username(),
        Err(CoreError::InvalidClaim { .. })
    ));
}

#[test]
fn given_json_object_when_deserialized_then_claims_readable() {
    let claims: IdentityClaims = serde_json::from_value(json!({
        "sub": "f81d4fae",
        "preferred_username": "jdoe",
        "email_verified": true
    }))
    .unwrap();

    assert!(claims.has_subject());
    assert_eq!(claims.preferred_username().unwrap(), "jdoe");
    assert_that!(claims.text("email_verified"), ok(some(eq("true"))));
}

#[test]
fn given_absent_claim_when_text_then_none() {
    let claims = IdentityClaims::default();

    assert_that!(claims.text("email"), ok(none()));
    assert!(!claims.has_subject());
    assert!(claims.is_empty());
}

#[test]
fn given_null_or_array_claim_when_text_then_invalid_claim() {
    let claims = IdentityClaims::default()
        .with("email", json!(null))
        .with("given_name", json!(["a", "b"]));

    assert!(matches!(
        claims.text("email"),
        Err(CoreError::InvalidClaim { .. })
    ));
    assert!(matches!(
        claims.text("given_name"),
        Err(CoreError::InvalidClaim { .. })
    ));
}

#[test]
fn given_several_aliases_when_resolved_then_last_present_wins() {
    let claims = IdentityClaims::default()
        .with("first_name", "First")
        .with("christian_name", "Christian");

    let resolved = claims
        .text_by_precedence(&["first_name", "given_name", "christian_name"])
        .unwrap();

    assert_that!(resolved, some(eq("Christian")));
}
