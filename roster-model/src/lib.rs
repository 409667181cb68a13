//! Core data model definitions shared across Roster crates.
#![allow(missing_docs)]

pub mod ids;
pub mod role;
pub mod sort;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use ids::UserId;
pub use role::{ParseRoleError, UserRole};
pub use sort::{SortField, SortOrder};
pub use user::{UserDraft, UserListing, UserRecord, UserUpdate};
