use std::sync::Arc;

use roster_model::{
    SortField, SortOrder, UserDraft, UserId, UserRecord, UserRole, UserUpdate,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::directory::{DirectoryError, ListQuery, UserDirectory};
use crate::policy::{RoleOption, RolePolicy};
use crate::session::SessionGate;
use crate::validation::{DraftError, validate_draft, validate_update};

const DEFAULT_PAGE_SIZE: usize = 10;
const MAX_PAGE_SIZE: usize = 100;

/// Administrative workflows over the user directory.
///
/// Requires a signed-in operator for every call, validates drafts the way
/// the add/edit form does, and refuses role grants above the operator's
/// own rank before anything reaches the directory.
#[derive(Clone)]
pub struct UserAdministration {
    directory: Arc<dyn UserDirectory>,
    session: SessionGate,
    policy: RolePolicy,
}

impl std::fmt::Debug for UserAdministration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAdministration")
            .field("directory", &Arc::strong_count(&self.directory))
            .field("session", &self.session)
            .field("policy", &self.policy)
            .finish()
    }
}

impl UserAdministration {
    pub fn new(directory: Arc<dyn UserDirectory>, session: SessionGate) -> Self {
        Self {
            directory,
            session,
            policy: RolePolicy::new(),
        }
    }

    pub fn session(&self) -> &SessionGate {
        &self.session
    }

    pub async fn list_users(
        &self,
        options: ListUsersOptions,
    ) -> Result<PaginatedUsers, AdminError> {
        self.actor()?;

        let listing = self
            .directory
            .list(ListQuery::new(
                options.active_only,
                options.sort_field,
                options.sort_order,
            ))
            .await?;

        let total = listing.total;
        let page_size = options.page_size.clamp(1, MAX_PAGE_SIZE);
        let last_page = total.saturating_sub(1) / page_size;
        let page_index = options.page_index.min(last_page);

        let users = listing
            .users
            .into_iter()
            .skip(page_index * page_size)
            .take(page_size)
            .collect();

        Ok(PaginatedUsers {
            total,
            page_index,
            page_size,
            users,
        })
    }

    /// Roles the signed-in operator may offer in the add/edit form.
    pub fn assignable_roles(&self) -> Result<Vec<RoleOption>, AdminError> {
        let actor = self.actor()?;
        Ok(self.policy.assignable_options(actor))
    }

    pub async fn create_user(&self, draft: UserDraft) -> Result<UserRecord, AdminError> {
        let actor = self.actor()?;
        let draft = validate_draft(draft)?;
        self.authorize_role(actor, draft.role)?;

        let user = self.directory.create(draft).await?;
        info!(user_id = %user.id, actor = %actor, "user created via admin");
        Ok(user)
    }

    pub async fn update_user(
        &self,
        user_id: UserId,
        update: UserUpdate,
    ) -> Result<UserRecord, AdminError> {
        let actor = self.actor()?;
        let update = validate_update(update)?;
        self.authorize_role(actor, update.role)?;

        let user = self.directory.update(user_id, update).await?;
        info!(user_id = %user.id, actor = %actor, "user updated via admin");
        Ok(user)
    }

    pub async fn set_status(&self, user_id: UserId, active: bool) -> Result<(), AdminError> {
        self.actor()?;
        self.directory.set_status(user_id, active).await?;
        Ok(())
    }

    /// Flip a user's active flag and return the new value.
    pub async fn toggle_status(&self, user_id: UserId) -> Result<bool, AdminError> {
        self.actor()?;
        let user = self.directory.get(user_id).await?;
        let active = !user.status;
        self.directory.set_status(user_id, active).await?;
        Ok(active)
    }

    pub async fn delete_user(&self, user_id: UserId) -> Result<(), AdminError> {
        let actor = self.actor()?;
        self.directory.delete(user_id).await?;
        info!(user_id = %user_id, actor = %actor, "user deleted via admin");
        Ok(())
    }

    /// Live uniqueness check for the email field.
    pub async fn check_email(
        &self,
        email: &str,
        excluding: Option<UserId>,
    ) -> Result<bool, AdminError> {
        self.actor()?;
        Ok(self.directory.email_in_use(email, excluding).await?)
    }

    fn actor(&self) -> Result<UserRole, AdminError> {
        self.session.current_role().ok_or(AdminError::Unauthenticated)
    }

    fn authorize_role(&self, actor: UserRole, requested: UserRole) -> Result<(), AdminError> {
        if self.policy.can_assign(actor, requested) {
            return Ok(());
        }
        warn!(actor = %actor, requested = %requested, "role grant refused");
        Err(AdminError::RoleNotAssignable { actor, requested })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUsersOptions {
    pub active_only: bool,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for ListUsersOptions {
    fn default() -> Self {
        Self {
            active_only: true,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatedUsers {
    /// Size of the filtered set, across all pages
    pub total: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub users: Vec<UserRecord>,
}

impl PaginatedUsers {
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("not signed in")]
    Unauthenticated,
    #[error("validation error: {0}")]
    Validation(#[from] DraftError),
    #[error("{actor} may not assign the {requested} role")]
    RoleNotAssignable {
        actor: UserRole,
        requested: UserRole,
    },
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use roster_model::UserListing;

    use super::*;
    use crate::directory::{InMemoryDirectory, MockUserDirectory};
    use crate::latency::LatencyProfile;

    async fn signed_in(role: UserRole) -> SessionGate {
        let gate = SessionGate::new(LatencyProfile::instant(), role);
        gate.login("operator@example.com", "secret").await.unwrap();
        gate
    }

    fn draft(role: UserRole) -> UserDraft {
        UserDraft::new("Ada", "Lovelace", "ada@example.com", role)
    }

    #[tokio::test]
    async fn requires_sign_in() {
        let gate = SessionGate::new(LatencyProfile::instant(), UserRole::Admin);
        let admin = UserAdministration::new(Arc::new(MockUserDirectory::new()), gate);

        assert_eq!(
            admin.list_users(ListUsersOptions::default()).await,
            Err(AdminError::Unauthenticated)
        );
        assert_eq!(admin.assignable_roles(), Err(AdminError::Unauthenticated));
    }

    #[tokio::test]
    async fn refuses_roles_above_actor_without_touching_directory() {
        let mut directory = MockUserDirectory::new();
        directory.expect_create().never();

        let admin =
            UserAdministration::new(Arc::new(directory), signed_in(UserRole::Manager).await);
        let err = admin.create_user(draft(UserRole::Admin)).await.unwrap_err();
        assert_eq!(
            err,
            AdminError::RoleNotAssignable {
                actor: UserRole::Manager,
                requested: UserRole::Admin,
            }
        );
    }

    #[tokio::test]
    async fn submits_trimmed_drafts() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_create()
            .withf(|draft| draft.first_name == "Ada" && draft.email == "ada@example.com")
            .times(1)
            .returning(|draft| Ok(draft.assign(UserId(13))));

        let admin =
            UserAdministration::new(Arc::new(directory), signed_in(UserRole::Manager).await);
        let mut input = draft(UserRole::User);
        input.first_name = "  Ada ".into();
        input.email = " ada@example.com".into();

        let created = admin.create_user(input).await.unwrap();
        assert_eq!(created.id, UserId(13));
    }

    #[tokio::test]
    async fn invalid_drafts_never_reach_directory() {
        let mut directory = MockUserDirectory::new();
        directory.expect_update().never();

        let admin =
            UserAdministration::new(Arc::new(directory), signed_in(UserRole::Admin).await);
        let update = UserUpdate {
            first_name: "A".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            role: UserRole::User,
        };
        let err = admin.update_user(UserId(1), update).await.unwrap_err();
        assert!(matches!(err, AdminError::Validation(DraftError::FirstName(_))));
    }

    #[tokio::test]
    async fn toggle_reads_then_flips() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_get()
            .with(eq(UserId(3)))
            .returning(|id| Ok(draft(UserRole::User).with_status(false).assign(id)));
        directory
            .expect_set_status()
            .with(eq(UserId(3)), eq(true))
            .times(1)
            .returning(|_, _| Ok(()));

        let admin =
            UserAdministration::new(Arc::new(directory), signed_in(UserRole::Admin).await);
        assert!(admin.toggle_status(UserId(3)).await.unwrap());
    }

    #[tokio::test]
    async fn directory_errors_pass_through() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_list()
            .returning(|_| Err(DirectoryError::QueryFailed("offline".into())));
        directory
            .expect_delete()
            .returning(|id| Err(DirectoryError::NotFound(id)));

        let admin =
            UserAdministration::new(Arc::new(directory), signed_in(UserRole::Admin).await);
        assert!(matches!(
            admin.list_users(ListUsersOptions::default()).await,
            Err(AdminError::Directory(DirectoryError::QueryFailed(_)))
        ));
        assert_eq!(
            admin.delete_user(UserId(99)).await,
            Err(AdminError::Directory(DirectoryError::NotFound(UserId(99))))
        );
    }

    #[tokio::test]
    async fn pages_are_clamped() {
        let directory = InMemoryDirectory::seeded(LatencyProfile::instant());
        let admin =
            UserAdministration::new(Arc::new(directory), signed_in(UserRole::Admin).await);

        let page = admin
            .list_users(ListUsersOptions {
                active_only: false,
                page_index: 7,
                page_size: 5,
                ..ListUsersOptions::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(page.page_index, 2);
        assert_eq!(page.page_count(), 3);
        assert_eq!(page.users.len(), 2);

        let page = admin
            .list_users(ListUsersOptions {
                page_size: 0,
                ..ListUsersOptions::default()
            })
            .await
            .unwrap();
        assert_eq!(page.page_size, 1);
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.total, 8);
    }

    #[tokio::test]
    async fn empty_listing_yields_first_page() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_list()
            .returning(|_| Ok(UserListing::default()));

        let admin =
            UserAdministration::new(Arc::new(directory), signed_in(UserRole::User).await);
        let page = admin
            .list_users(ListUsersOptions {
                page_index: 4,
                ..ListUsersOptions::default()
            })
            .await
            .unwrap();
        assert_eq!(page.page_index, 0);
        assert!(page.users.is_empty());
        assert_eq!(page.page_count(), 0);
    }
}
