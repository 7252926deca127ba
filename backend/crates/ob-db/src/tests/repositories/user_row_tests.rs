use crate::DbError;
use crate::repositories::user_repository::UserRow;

use ob_core::LocalUser;

use googletest::prelude::*;

fn valid_row() -> UserRow {
    UserRow {
        id: "6f1c2b8e-0a4d-4c7e-9a53-1d2f3e4a5b6c".to_string(),
        username: "jdoe".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@example.com".to_string(),
        last_login: Some(1_760_000_000),
        is_staff: true,
        is_superuser: false,
        date_joined: 1_750_000_000,
    }
}

#[test]
fn given_valid_row_when_converted_then_user_fields_match() {
    let user = LocalUser::try_from(valid_row()).unwrap();

    assert_that!(user.username, eq("jdoe"));
    assert_that!(user.first_name, eq("Jane"));
    assert_that!(user.is_staff, eq(true));
    assert_eq!(user.last_login.map(|ts| ts.timestamp()), Some(1_760_000_000));
    assert_eq!(user.date_joined.timestamp(), 1_750_000_000);
}

#[test]
fn given_row_without_last_login_when_converted_then_none() {
    let mut row = valid_row();
    row.last_login = None;

    let user = LocalUser::try_from(row).unwrap();

    assert!(user.last_login.is_none());
}

#[test]
fn given_malformed_id_when_converted_then_corrupt_row_error() {
    let mut row = valid_row();
    row.id = "not-a-uuid".to_string();

    let result = LocalUser::try_from(row);

    assert!(matches!(result, Err(DbError::CorruptRow { .. })));
}

#[test]
fn given_out_of_range_timestamp_when_converted_then_corrupt_row_error() {
    let mut row = valid_row();
    row.date_joined = i64::MAX;

    let result = LocalUser::try_from(row);

    assert!(matches!(result, Err(DbError::CorruptRow { .. })));
}
