use crate::{IdentityClaims, LocalUser, ProfileUpdate};

use chrono::Utc;
use googletest::prelude::*;

#[test]
fn given_all_first_name_aliases_then_christian_name_wins() {
    let claims = IdentityClaims::default()
        .with("first_name", "Fiona")
        .with("given_name", "Grace")
        .with("christian_name", "Clara");

    let update = ProfileUpdate::from_claims(&claims, Utc::now()).unwrap();

    assert_that!(update.first_name, some(eq("Clara")));
}

#[test]
fn given_first_and_given_name_then_given_name_wins() {
    let claims = IdentityClaims::default()
        .with("first_name", "Fiona")
        .with("given_name", "Grace");

    let update = ProfileUpdate::from_claims(&claims, Utc::now()).unwrap();

    assert_that!(update.first_name, some(eq("Grace")));
}

#[test]
fn given_family_and_last_name_then_last_name_wins() {
    let claims = IdentityClaims::default()
        .with("family_name", "Family")
        .with("last_name", "Last");

    let update = ProfileUpdate::from_claims(&claims, Utc::now()).unwrap();

    assert_that!(update.last_name, some(eq("Last")));
}

#[test]
fn given_withheld_claims_then_fields_absent_but_last_login_set() {
    let now = Utc::now();
    let claims = IdentityClaims::default().with("preferred_username", "jdoe");

    let update = ProfileUpdate::from_claims(&claims, now).unwrap();

    assert_that!(update.first_name, none());
    assert_that!(update.last_name, none());
    assert_that!(update.email, none());
    assert_eq!(update.last_login, now);
}

#[test]
fn given_partial_update_when_applied_then_absent_fields_untouched() {
    let mut user = LocalUser::new("jdoe");
    user.first_name = "Old".to_string();
    user.email = "old@example.com".to_string();
    let now = Utc::now();
    let update = ProfileUpdate {
        first_name: None,
        last_name: Some("Doe".to_string()),
        email: Some("new@example.com".to_string()),
        last_login: now,
    };

    update.apply_to(&mut user);

    assert_that!(user.first_name, eq("Old"));
    assert_that!(user.last_name, eq("Doe"));
    assert_that!(user.email, eq("new@example.com"));
    assert_eq!(user.last_login, Some(now));
}
