use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// HTML5 "valid e-mail address" grammar, as browsers and form libraries
// apply it.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    ))
    .expect("email regex should compile")
});

const MAX_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Email address value object with validation
///
/// Preserves the caller's casing; uniqueness checks elsewhere compare
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address with validation
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailAddressError> {
        let email = email.as_ref().trim().to_string();

        if email.is_empty() {
            return Err(EmailAddressError::Empty);
        }

        if email.len() > MAX_LENGTH {
            return Err(EmailAddressError::TooLong);
        }

        let local_part_ok = email
            .split_once('@')
            .is_some_and(|(local, _)| local.len() <= MAX_LOCAL_PART_LENGTH);
        if !local_part_ok || !EMAIL_PATTERN.is_match(&email) {
            return Err(EmailAddressError::InvalidFormat);
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Case-insensitive comparison
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when creating an email address
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailAddressError {
    #[error("Email address is required")]
    Empty,

    #[error("Email address too long: maximum 254 characters allowed")]
    TooLong,

    #[error("Please enter a valid email address")]
    InvalidFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_addresses() {
        assert!(EmailAddress::new("alice.johnson@example.com").is_ok());
        assert!(EmailAddress::new("o'brien+admin@mail.example.org").is_ok());
        assert!(EmailAddress::new("root@localhost").is_ok());
    }

    #[test]
    fn invalid_addresses() {
        assert_eq!(EmailAddress::new(""), Err(EmailAddressError::Empty));
        assert_eq!(
            EmailAddress::new("no-at-sign"),
            Err(EmailAddressError::InvalidFormat)
        );
        assert_eq!(
            EmailAddress::new("two@@example.com"),
            Err(EmailAddressError::InvalidFormat)
        );
        assert_eq!(
            EmailAddress::new("dot.@-example.com"),
            Err(EmailAddressError::InvalidFormat)
        );
        assert_eq!(
            EmailAddress::new(format!("{}@example.com", "a".repeat(65))),
            Err(EmailAddressError::InvalidFormat)
        );
        assert_eq!(
            EmailAddress::new(format!("a@{}.com", "b".repeat(260))),
            Err(EmailAddressError::TooLong)
        );
    }

    #[test]
    fn preserves_case_but_matches_insensitively() {
        let email = EmailAddress::new(" Alice@Example.com ").unwrap();
        assert_eq!(email.as_str(), "Alice@Example.com");
        assert!(email.matches("alice@example.COM"));
    }
}
