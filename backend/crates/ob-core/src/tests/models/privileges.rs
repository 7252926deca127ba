use crate::{LocalUser, Privileges, RoleSet};

#[test]
fn given_no_roles_then_no_privileges() {
    let privileges = Privileges::from_roles(&RoleSet::new());

    assert!(!privileges.is_staff);
    assert!(!privileges.is_superuser);
}

#[test]
fn given_admin_role_then_staff_but_not_superuser() {
    let privileges = Privileges::from_roles(&RoleSet::from_iter(["admin"]));

    assert!(privileges.is_staff);
    assert!(!privileges.is_superuser);
}

#[test]
fn given_superuser_role_then_staff_and_superuser() {
    let privileges = Privileges::from_roles(&RoleSet::from_iter(["superuser"]));

    assert!(privileges.is_staff);
    assert!(privileges.is_superuser);
}

#[test]
fn given_admin_and_superuser_then_superuser_regardless_of_admin() {
    let with_admin = Privileges::from_roles(&RoleSet::from_iter(["admin", "superuser"]));
    let without_admin = Privileges::from_roles(&RoleSet::from_iter(["superuser", "viewer"]));

    assert!(with_admin.is_superuser);
    assert!(without_admin.is_superuser);
}

#[test]
fn given_differently_cased_roles_then_not_matched() {
    let privileges = Privileges::from_roles(&RoleSet::from_iter(["Admin", "SUPERUSER"]));

    assert_eq!(privileges, Privileges::default());
}

#[test]
fn given_privileged_user_when_roles_revoked_then_flags_cleared() {
    let mut user = LocalUser::new("jdoe");
    user.is_staff = true;
    user.is_superuser = true;

    Privileges::from_roles(&RoleSet::new()).apply_to(&mut user);

    assert!(!user.is_staff);
    assert!(!user.is_superuser);
}
