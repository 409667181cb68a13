//! User-facing notifications and confirmation prompts
//!
//! The admin screens report every outcome as a short-lived notice and ask
//! before destructive changes. Wording and display durations live here so
//! every front end says the same thing.

use std::time::Duration;

use roster_model::UserRecord;
use serde::Serialize;

use crate::admin::AdminError;
use crate::directory::DirectoryError;

const SHORT: Duration = Duration::from_millis(3_000);
const LONG: Duration = Duration::from_millis(4_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// The operation a notice reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    LoadUsers,
    CreateUser,
    UpdateUser,
    UpdateStatus,
    DeleteUser,
}

impl AdminAction {
    fn failure_message(&self) -> &'static str {
        match self {
            AdminAction::LoadUsers => "Failed to load users",
            AdminAction::CreateUser => "Failed to create user. Please try again.",
            AdminAction::UpdateUser => "Failed to update user. Please try again.",
            AdminAction::UpdateStatus => "Failed to update user status",
            AdminAction::DeleteUser => "Failed to delete user. Please try again.",
        }
    }

    fn display_duration(&self) -> Duration {
        match self {
            AdminAction::CreateUser | AdminAction::UpdateUser => LONG,
            AdminAction::LoadUsers | AdminAction::UpdateStatus | AdminAction::DeleteUser => SHORT,
        }
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    fn success(message: String, duration: Duration) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
            duration,
        }
    }

    fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            duration,
        }
    }

    pub fn user_created(user: &UserRecord) -> Self {
        Self::success(format!("User {} created successfully", user.full_name()), LONG)
    }

    pub fn user_updated(user: &UserRecord) -> Self {
        Self::success(format!("User {} updated successfully", user.full_name()), LONG)
    }

    pub fn status_changed(active: bool) -> Self {
        let verb = if active { "activated" } else { "deactivated" };
        Self::success(format!("User {verb} successfully"), SHORT)
    }

    pub fn user_deleted(user: &UserRecord) -> Self {
        Self::success(
            format!("{} has been deleted successfully", user.full_name()),
            SHORT,
        )
    }

    /// Translate a failed operation into what the operator sees.
    pub fn from_error(action: AdminAction, error: &AdminError) -> Self {
        match error {
            AdminError::Directory(DirectoryError::DuplicateEmail { .. })
                if matches!(action, AdminAction::CreateUser | AdminAction::UpdateUser) =>
            {
                Self::error("Email address is already registered", LONG)
            }
            AdminError::Unauthenticated => {
                Self::error("Please sign in to continue", action.display_duration())
            }
            AdminError::RoleNotAssignable { requested, .. } => Self::error(
                format!("You are not allowed to assign the {} role", requested.label()),
                action.display_duration(),
            ),
            _ => Self::error(action.failure_message(), action.display_duration()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// A yes/no prompt shown before a status change or deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub title: &'static str,
    pub message: String,
    pub confirm_text: &'static str,
    pub cancel_text: &'static str,
    pub destructive: bool,
}

impl Confirmation {
    pub fn status_change(user: &UserRecord) -> Self {
        let (verb, confirm_text) = if user.status {
            ("deactivate", "Deactivate")
        } else {
            ("activate", "Activate")
        };

        Self {
            title: "Confirm Status Change",
            message: format!("Are you sure you want to {verb} {}?", user.full_name()),
            confirm_text,
            cancel_text: "Cancel",
            destructive: false,
        }
    }

    pub fn delete(user: &UserRecord) -> Self {
        Self {
            title: "Confirm Delete",
            message: format!(
                "Are you sure you want to permanently delete {}? This action cannot be \
                 undone and will remove all associated data.",
                user.full_name()
            ),
            confirm_text: "Delete Permanently",
            cancel_text: "Cancel",
            destructive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use roster_model::{UserId, UserRole};

    use super::*;

    fn ada(status: bool) -> UserRecord {
        UserRecord {
            id: UserId(1),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            role: UserRole::User,
            status,
        }
    }

    #[test]
    fn success_messages() {
        let notice = Notice::user_created(&ada(true));
        assert_eq!(notice.message, "User Ada Lovelace created successfully");
        assert_eq!(notice.duration, Duration::from_secs(4));

        let notice = Notice::status_changed(false);
        assert_eq!(notice.message, "User deactivated successfully");
        assert_eq!(notice.duration, Duration::from_secs(3));

        assert_eq!(
            Notice::user_deleted(&ada(true)).message,
            "Ada Lovelace has been deleted successfully"
        );
    }

    #[test]
    fn duplicate_email_gets_specific_message() {
        let err = AdminError::Directory(DirectoryError::DuplicateEmail {
            email: "ada@example.com".into(),
        });
        let notice = Notice::from_error(AdminAction::UpdateUser, &err);
        assert!(notice.is_error());
        assert_eq!(notice.message, "Email address is already registered");
    }

    #[test]
    fn other_failures_use_action_message() {
        let err = AdminError::Directory(DirectoryError::NotFound(UserId(4)));
        assert_eq!(
            Notice::from_error(AdminAction::DeleteUser, &err).message,
            "Failed to delete user. Please try again."
        );

        let err = AdminError::Directory(DirectoryError::QueryFailed("timeout".into()));
        let notice = Notice::from_error(AdminAction::LoadUsers, &err);
        assert_eq!(notice.message, "Failed to load users");
        assert_eq!(notice.duration, Duration::from_secs(3));
    }

    #[test]
    fn confirmations_reflect_current_status() {
        let prompt = Confirmation::status_change(&ada(true));
        assert_eq!(prompt.confirm_text, "Deactivate");
        assert_eq!(prompt.message, "Are you sure you want to deactivate Ada Lovelace?");

        let prompt = Confirmation::status_change(&ada(false));
        assert_eq!(prompt.confirm_text, "Activate");

        assert!(Confirmation::delete(&ada(true)).destructive);
    }
}
