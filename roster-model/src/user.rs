use crate::{ids::UserId, role::UserRole};

/// A user as held by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    /// Active flag; inactive users are hidden from active-only listings.
    pub status: bool,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive email comparison used for uniqueness checks.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    pub fn is_active(&self) -> bool {
        self.status
    }
}

/// Caller-supplied fields for a new user, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    /// Defaults to active when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<bool>,
}

impl UserDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            role,
            status: None,
        }
    }

    pub fn with_status(mut self, active: bool) -> Self {
        self.status = Some(active);
        self
    }

    /// Materialise the record the directory stores for this draft.
    pub fn assign(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
            status: self.status.unwrap_or(true),
        }
    }
}

/// Editable fields of an existing user. Status and id are not part of an
/// edit; status has its own operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
}

impl UserUpdate {
    pub fn apply_to(self, record: &mut UserRecord) {
        record.first_name = self.first_name;
        record.last_name = self.last_name;
        record.email = self.email;
        record.role = self.role;
    }
}

impl From<&UserRecord> for UserUpdate {
    fn from(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            role: record.role,
        }
    }
}

/// Result of a directory listing. `total` counts the filtered set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserListing {
    pub users: Vec<UserRecord>,
    pub total: usize,
}

impl UserListing {
    pub fn new(users: Vec<UserRecord>) -> Self {
        let total = users.len();
        Self { users, total }
    }

    pub fn ids(&self) -> Vec<UserId> {
        self.users.iter().map(|user| user.id).collect()
    }
}
