use std::cmp::Ordering;

use crate::user::UserRecord;

/// Column the directory listing can be ordered by.
///
/// Parsing is lenient: the grid hands over whatever column id is active and
/// anything unrecognised sorts by first name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SortField {
    #[default]
    FirstName,
    LastName,
    Email,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[SortField::FirstName, SortField::LastName, SortField::Email]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::FirstName => "firstName",
            SortField::LastName => "lastName",
            SortField::Email => "email",
        }
    }

    /// Case-folded value of this field for `user`.
    pub fn key(&self, user: &UserRecord) -> String {
        match self {
            SortField::FirstName => user.first_name.to_lowercase(),
            SortField::LastName => user.last_name.to_lowercase(),
            SortField::Email => user.email.to_lowercase(),
        }
    }

    /// Compare two records by this field only.
    pub fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

impl From<&str> for SortField {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "lastName" | "last_name" => SortField::LastName,
            "email" => SortField::Email,
            _ => SortField::FirstName,
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl From<&str> for SortOrder {
    /// `"asc"` and the empty direction sort ascending; anything else is
    /// treated as descending.
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
