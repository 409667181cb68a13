use std::fmt;

/// User role enumeration for the directory's access hierarchy
///
/// The set is closed: every record carries exactly one of these roles.
/// Roles are ranked `Admin > Manager > User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserRole {
    /// Administrator with full system access
    /// - Can manage all users and settings
    Admin,

    /// Manager with delegated user administration
    /// - Can manage users
    /// - Can view reports
    Manager,

    /// Regular user with basic access
    #[default]
    User,
}

impl UserRole {
    /// Get all available roles, highest rank first
    pub fn all() -> &'static [UserRole] {
        &[UserRole::Admin, UserRole::Manager, UserRole::User]
    }

    /// Position in the hierarchy; higher outranks lower.
    pub const fn rank(self) -> u8 {
        match self {
            UserRole::Admin => 2,
            UserRole::Manager => 1,
            UserRole::User => 0,
        }
    }

    /// Check if this role is at or above `other` in the hierarchy
    pub fn outranks_or_equals(self, other: UserRole) -> bool {
        self.rank() >= other.rank()
    }

    /// Whether an operator holding this role may grant `other`.
    ///
    /// Operators grant their own role or anything below it.
    pub fn can_assign(self, other: UserRole) -> bool {
        self.outranks_or_equals(other)
    }

    /// Get the role name as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::User => "user",
        }
    }

    /// Label shown in role pickers
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Manager => "Manager",
            UserRole::User => "User",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Admin => "Full system access",
            UserRole::Manager => "Manage users",
            UserRole::User => "Basic access",
        }
    }

    pub fn permission_summary(&self) -> &'static str {
        match self {
            UserRole::Admin => "Can manage all users and settings.",
            UserRole::Manager => "Can manage users and view reports.",
            UserRole::User => "Standard user permissions.",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "Admin"),
            UserRole::Manager => write!(f, "Manager"),
            UserRole::User => write!(f, "User"),
        }
    }
}

/// Returned when a string names no known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid user role: {}", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl std::str::FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" | "administrator" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "user" => Ok(UserRole::User),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_hierarchy() {
        assert!(UserRole::Admin.outranks_or_equals(UserRole::Manager));
        assert!(UserRole::Admin.outranks_or_equals(UserRole::User));
        assert!(UserRole::Manager.outranks_or_equals(UserRole::Manager));
        assert!(!UserRole::Manager.outranks_or_equals(UserRole::Admin));
        assert!(!UserRole::User.outranks_or_equals(UserRole::Manager));
    }

    #[test]
    fn assignment_stops_at_own_rank() {
        for role in UserRole::all() {
            assert!(UserRole::Admin.can_assign(*role));
        }
        assert!(UserRole::Manager.can_assign(UserRole::Manager));
        assert!(UserRole::Manager.can_assign(UserRole::User));
        assert!(!UserRole::Manager.can_assign(UserRole::Admin));
        assert!(UserRole::User.can_assign(UserRole::User));
        assert!(!UserRole::User.can_assign(UserRole::Manager));
    }

    #[test]
    fn string_conversion() {
        assert_eq!(UserRole::Manager.as_str(), "manager");
        assert_eq!(UserRole::Admin.to_string(), "Admin");

        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(
            "administrator".parse::<UserRole>().unwrap(),
            UserRole::Admin
        );
        assert_eq!(" MANAGER ".parse::<UserRole>().unwrap(), UserRole::Manager);
        assert!("moderator".parse::<UserRole>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_original_casing() {
        let json = serde_json::to_string(&UserRole::Manager).unwrap();
        assert_eq!(json, "\"Manager\"");
        let back: UserRole = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(back, UserRole::Admin);
    }
}
