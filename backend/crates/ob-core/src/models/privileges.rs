use crate::{ADMIN_ROLE, LocalUser, RoleSet, SUPERUSER_ROLE};

/// Privilege flags derived from realm roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Privileges {
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl Privileges {
    pub fn from_roles(roles: &RoleSet) -> Self {
        let is_superuser = roles.contains(SUPERUSER_ROLE);
        Self {
            is_staff: is_superuser || roles.contains(ADMIN_ROLE),
            is_superuser,
        }
    }

    /// Overwrite both flags; stored values never carry over
    pub fn apply_to(self, user: &mut LocalUser) {
        user.is_staff = self.is_staff;
        user.is_superuser = self.is_superuser;
    }
}
