//! # Roster Core
//!
//! Core library for Roster, the user administration back end: the user
//! directory, the role hierarchy, draft validation, and the mock session
//! gate the admin screens sit behind.
//!
//! ## Overview
//!
//! - **Directory**: asynchronous store of user records with unique ids and
//!   case-insensitively unique emails ([`directory`])
//! - **Role Policy**: which roles an operator may grant ([`policy`])
//! - **Validation**: the add/edit form's field rules ([`validation`])
//! - **Session**: mock sign-in gate ([`session`])
//! - **Administration**: the facade the screens call, combining all of the
//!   above ([`admin`]), plus the notices it reports with ([`notice`])
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use roster_core::{
//!     InMemoryDirectory, LatencyProfile, ListUsersOptions, SessionGate,
//!     UserAdministration,
//! };
//! use roster_model::UserRole;
//!
//! async fn first_page() -> Result<(), Box<dyn std::error::Error>> {
//!     let latency = LatencyProfile::default();
//!     let directory = Arc::new(InMemoryDirectory::seeded(latency));
//!     let session = SessionGate::new(latency, UserRole::Admin);
//!     session.login("operator@example.com", "secret").await?;
//!
//!     let admin = UserAdministration::new(directory, session);
//!     let page = admin.list_users(ListUsersOptions::default()).await?;
//!     println!("{} active users", page.total);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Administrative workflows over the directory
pub mod admin;

/// User directory trait and in-memory store
pub mod directory;

/// Simulated backend latency
pub mod latency;

/// Notifications and confirmation prompts
pub mod notice;

/// Role assignment hierarchy
pub mod policy;

/// Mock sign-in gate
pub mod session;

/// Add/edit form validation
pub mod validation;

pub use admin::{AdminError, ListUsersOptions, PaginatedUsers, UserAdministration};
pub use directory::{DirectoryError, InMemoryDirectory, ListQuery, UserDirectory};
pub use latency::LatencyProfile;
pub use notice::{AdminAction, Confirmation, Notice, NoticeLevel};
pub use policy::{RoleOption, RolePolicy};
pub use session::{Session, SessionError, SessionGate};
pub use validation::{DraftError, EmailAddress, PersonName};
