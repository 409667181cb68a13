use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static ALLOWED_CHARACTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("name regex should compile"));
static REPEATED_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-']{2,}").expect("separator regex should compile"));

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 100;

/// First or last name value object with validation
///
/// Represents a validated name that follows the form rules:
/// - 2-100 characters after trimming
/// - Latin letters, whitespace, hyphens and apostrophes only
/// - No two separators in a row ("Mary  Ann", "O''Brien", "Jean--Luc")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new name with validation
    pub fn new(name: impl AsRef<str>) -> Result<Self, PersonNameError> {
        let name = name.as_ref().trim().to_string();

        if name.is_empty() {
            return Err(PersonNameError::Empty);
        }

        let length = name.chars().count();
        if length < MIN_LENGTH {
            return Err(PersonNameError::TooShort);
        }
        if length > MAX_LENGTH {
            return Err(PersonNameError::TooLong);
        }

        if !ALLOWED_CHARACTERS.is_match(&name) || REPEATED_SEPARATORS.is_match(&name) {
            return Err(PersonNameError::InvalidCharacters);
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when creating a name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonNameError {
    #[error("Name is required")]
    Empty,

    #[error("Name too short: minimum 2 characters required")]
    TooShort,

    #[error("Name too long: maximum 100 characters allowed")]
    TooLong,

    #[error("Name may only contain letters, spaces, hyphens and apostrophes")]
    InvalidCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(PersonName::new("Alice").is_ok());
        assert!(PersonName::new("Mary Ann").is_ok());
        assert!(PersonName::new("Jean-Luc").is_ok());
        assert!(PersonName::new("O'Brien").is_ok());
        assert!(PersonName::new("Al").is_ok());
    }

    #[test]
    fn invalid_names() {
        assert_eq!(PersonName::new("   "), Err(PersonNameError::Empty));
        assert_eq!(PersonName::new("A"), Err(PersonNameError::TooShort));
        assert_eq!(PersonName::new("a".repeat(101)), Err(PersonNameError::TooLong));
        assert_eq!(
            PersonName::new("Alice42"),
            Err(PersonNameError::InvalidCharacters)
        );
        assert_eq!(
            PersonName::new("Mary  Ann"),
            Err(PersonNameError::InvalidCharacters)
        );
        assert_eq!(
            PersonName::new("Jean--Luc"),
            Err(PersonNameError::InvalidCharacters)
        );
        assert_eq!(PersonName::new("José"), Err(PersonNameError::InvalidCharacters));
    }

    #[test]
    fn trimming() {
        let name = PersonName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn length_counts_trimmed_characters() {
        assert_eq!(PersonName::new(" A "), Err(PersonNameError::TooShort));
        assert_eq!(PersonName::new(" Al ").unwrap().as_str(), "Al");
    }
}
