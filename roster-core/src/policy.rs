//! Role hierarchy policy
//!
//! An actor may grant its own role and every role ranked below it:
//!
//! | Actor   | May assign              |
//! |---------|-------------------------|
//! | Admin   | Admin, Manager, User    |
//! | Manager | Manager, User           |
//! | User    | User                    |
//!
//! The directory does not consult this policy; the administration layer
//! applies it before submitting a draft.

use roster_model::UserRole;
use serde::Serialize;

/// Fixed role-assignment hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RolePolicy;

impl RolePolicy {
    pub fn new() -> Self {
        Self
    }

    /// Roles `actor` may grant, highest first.
    pub fn allowed_roles(&self, actor: UserRole) -> &'static [UserRole] {
        match actor {
            UserRole::Admin => &[UserRole::Admin, UserRole::Manager, UserRole::User],
            UserRole::Manager => &[UserRole::Manager, UserRole::User],
            UserRole::User => &[UserRole::User],
        }
    }

    pub fn can_assign(&self, actor: UserRole, role: UserRole) -> bool {
        self.allowed_roles(actor).contains(&role)
    }

    /// Picker entries for the roles `actor` may grant.
    pub fn assignable_options(&self, actor: UserRole) -> Vec<RoleOption> {
        self.allowed_roles(actor)
            .iter()
            .copied()
            .map(RoleOption::from)
            .collect()
    }
}

/// A role as offered in the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleOption {
    pub role: UserRole,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<UserRole> for RoleOption {
    fn from(role: UserRole) -> Self {
        Self {
            role,
            label: role.label(),
            description: role.description(),
        }
    }
}
