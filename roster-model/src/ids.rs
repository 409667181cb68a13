/// Strongly typed identifier for directory users.
///
/// Identifiers are assigned by the directory on creation and are strictly
/// increasing, so ordering by id is also ordering by insertion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(pub u64);

impl UserId {
    pub const fn new(raw: u64) -> Self {
        UserId(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier handed out after this one, or `None` once the id
    /// space is exhausted.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(UserId(raw)),
            None => None,
        }
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        UserId(raw)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_stops_at_the_end_of_the_id_space() {
        assert_eq!(UserId(41).next(), Some(UserId(42)));
        assert_eq!(UserId(u64::MAX).next(), None);
    }
}
