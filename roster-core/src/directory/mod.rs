//! User directory: the authoritative collection of user records.
//!
//! [`UserDirectory`] is the seam the administration layer talks to;
//! [`InMemoryDirectory`] is the mock backend that owns the records.

mod in_memory;
mod seed;

pub use in_memory::InMemoryDirectory;
pub use seed::sample_users;

use async_trait::async_trait;
use roster_model::{
    SortField, SortOrder, UserDraft, UserId, UserListing, UserRecord,
    UserUpdate,
};

/// Repository trait for user directory operations
///
/// All operations are asynchronous and complete independently; callers
/// that need ordering between two calls must await the first before
/// issuing the second. Mutations become visible to later listings but no
/// change events are emitted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Filtered, sorted snapshot of the directory
    async fn list(&self, query: ListQuery) -> Result<UserListing, DirectoryError>;

    /// Add a user, assigning the next id
    async fn create(&self, draft: UserDraft) -> Result<UserRecord, DirectoryError>;

    /// Replace names, email and role of an existing user
    async fn update(
        &self,
        id: UserId,
        update: UserUpdate,
    ) -> Result<UserRecord, DirectoryError>;

    /// Set the active flag of an existing user
    async fn set_status(&self, id: UserId, active: bool) -> Result<(), DirectoryError>;

    /// Remove a user permanently
    async fn delete(&self, id: UserId) -> Result<(), DirectoryError>;

    /// Find a user by their identifier
    async fn get(&self, id: UserId) -> Result<UserRecord, DirectoryError>;

    /// Check whether `email` is held by any user other than `excluding`
    async fn email_in_use(
        &self,
        email: &str,
        excluding: Option<UserId>,
    ) -> Result<bool, DirectoryError>;
}

/// Filter and ordering for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// Only return users whose status is active
    pub active_only: bool,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            active_only: true,
            sort_field: SortField::FirstName,
            sort_order: SortOrder::Asc,
        }
    }
}

impl ListQuery {
    pub fn new(active_only: bool, sort_field: SortField, sort_order: SortOrder) -> Self {
        Self {
            active_only,
            sort_field,
            sort_order,
        }
    }

    /// Every user, active or not, in default order.
    pub fn everyone() -> Self {
        Self {
            active_only: false,
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }
}

/// Errors that can occur during directory operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Email already exists: {email}")]
    DuplicateEmail { email: String },

    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("Failed to load users: {0}")]
    QueryFailed(String),

    #[error("Duplicate user id: {0}")]
    DuplicateId(UserId),

    #[error("No user id left after {0}")]
    IdsExhausted(UserId),
}

impl DirectoryError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_))
    }

    /// Check if this is a uniqueness violation (email or id)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            DirectoryError::DuplicateEmail { .. } | DirectoryError::DuplicateId(_)
        )
    }
}
