use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use roster_model::{UserDraft, UserId, UserListing, UserRecord, UserUpdate};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{DirectoryError, ListQuery, UserDirectory, seed};
use crate::latency::{LatencyProfile, simulate};

/// In-memory directory backing the admin screens.
///
/// Records live in a map keyed by id. Ids are handed out in increasing
/// order, so iterating the map yields insertion order, which is the tie
/// order listings preserve.
///
/// Each operation sleeps for its simulated latency and then checks and
/// applies its change under one lock acquisition. Operations issued
/// concurrently are therefore individually atomic but not ordered: the one
/// that completes last wins, and a call that lost a race against `delete`
/// reports `NotFound`.
#[derive(Clone)]
pub struct InMemoryDirectory {
    users: Arc<RwLock<BTreeMap<UserId, UserRecord>>>,
    latency: LatencyProfile,
}

impl fmt::Debug for InMemoryDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let user_count = self.users.try_read().map(|users| users.len()).ok();

        f.debug_struct("InMemoryDirectory")
            .field("user_count", &user_count)
            .field("latency", &self.latency)
            .finish()
    }
}

impl InMemoryDirectory {
    /// Create an empty directory
    pub fn new(latency: LatencyProfile) -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            latency,
        }
    }

    /// Create a directory holding the built-in sample users
    pub fn seeded(latency: LatencyProfile) -> Self {
        let users = seed::sample_users()
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(users)),
            latency,
        }
    }

    /// Create a directory from caller-provided records.
    ///
    /// Rejects fixtures that would break id or email uniqueness.
    pub fn from_records(
        records: impl IntoIterator<Item = UserRecord>,
        latency: LatencyProfile,
    ) -> Result<Self, DirectoryError> {
        let mut users: BTreeMap<UserId, UserRecord> = BTreeMap::new();

        for mut record in records {
            record.email = normalize_email(&record.email);
            if users.contains_key(&record.id) {
                return Err(DirectoryError::DuplicateId(record.id));
            }
            if users.values().any(|user| user.email_matches(&record.email)) {
                return Err(DirectoryError::DuplicateEmail {
                    email: record.email,
                });
            }
            users.insert(record.id, record);
        }

        Ok(Self {
            users: Arc::new(RwLock::new(users)),
            latency,
        })
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    /// Number of users currently held, without simulated latency.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    fn email_taken(
        users: &BTreeMap<UserId, UserRecord>,
        email: &str,
        excluding: Option<UserId>,
    ) -> bool {
        users
            .values()
            .any(|user| Some(user.id) != excluding && user.email_matches(email))
    }

    fn next_id(users: &BTreeMap<UserId, UserRecord>) -> Result<UserId, DirectoryError> {
        match users.keys().next_back() {
            Some(&last) => last.next().ok_or(DirectoryError::IdsExhausted(last)),
            None => Ok(UserId(1)),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn list(&self, query: ListQuery) -> Result<UserListing, DirectoryError> {
        simulate(self.latency.list).await;

        let users = tokio::time::timeout(self.latency.query_timeout, self.users.read())
            .await
            .map_err(|_| {
                DirectoryError::QueryFailed(format!(
                    "directory unavailable after {:?}",
                    self.latency.query_timeout
                ))
            })?;

        let mut matched: Vec<UserRecord> = users
            .values()
            .filter(|user| !query.active_only || user.status)
            .cloned()
            .collect();
        drop(users);

        // `sort_by` is stable: ties keep insertion order.
        matched.sort_by(|a, b| query.sort_order.apply(query.sort_field.compare(a, b)));

        debug!(
            active_only = query.active_only,
            sort_field = %query.sort_field,
            sort_order = %query.sort_order,
            total = matched.len(),
            "listed directory users"
        );

        Ok(UserListing::new(matched))
    }

    async fn create(&self, mut draft: UserDraft) -> Result<UserRecord, DirectoryError> {
        simulate(self.latency.mutation).await;
        draft.email = normalize_email(&draft.email);

        let mut users = self.users.write().await;
        if Self::email_taken(&users, &draft.email, None) {
            warn!(email = %draft.email, "rejected user creation: email already exists");
            return Err(DirectoryError::DuplicateEmail { email: draft.email });
        }

        let id = Self::next_id(&users).inspect_err(|err| {
            warn!(error = %err, "rejected user creation: id space exhausted");
        })?;
        let record = draft.assign(id);
        users.insert(id, record.clone());

        info!(user_id = %id, email = %record.email, role = %record.role, "created user");
        Ok(record)
    }

    async fn update(
        &self,
        id: UserId,
        mut update: UserUpdate,
    ) -> Result<UserRecord, DirectoryError> {
        simulate(self.latency.mutation).await;
        update.email = normalize_email(&update.email);

        let mut users = self.users.write().await;
        if !users.contains_key(&id) {
            warn!(user_id = %id, "rejected user update: not found");
            return Err(DirectoryError::NotFound(id));
        }
        if Self::email_taken(&users, &update.email, Some(id)) {
            warn!(user_id = %id, email = %update.email, "rejected user update: email already exists");
            return Err(DirectoryError::DuplicateEmail {
                email: update.email,
            });
        }

        let record = users.get_mut(&id).ok_or(DirectoryError::NotFound(id))?;
        update.apply_to(record);

        info!(user_id = %id, email = %record.email, role = %record.role, "updated user");
        Ok(record.clone())
    }

    async fn set_status(&self, id: UserId, active: bool) -> Result<(), DirectoryError> {
        simulate(self.latency.mutation).await;

        let mut users = self.users.write().await;
        let Some(record) = users.get_mut(&id) else {
            warn!(user_id = %id, "rejected status change: not found");
            return Err(DirectoryError::NotFound(id));
        };
        record.status = active;

        info!(user_id = %id, active, "changed user status");
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), DirectoryError> {
        simulate(self.latency.mutation).await;

        let mut users = self.users.write().await;
        if users.remove(&id).is_none() {
            warn!(user_id = %id, "rejected user deletion: not found");
            return Err(DirectoryError::NotFound(id));
        }

        info!(user_id = %id, "deleted user");
        Ok(())
    }

    async fn get(&self, id: UserId) -> Result<UserRecord, DirectoryError> {
        simulate(self.latency.lookup).await;

        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(DirectoryError::NotFound(id))
    }

    async fn email_in_use(
        &self,
        email: &str,
        excluding: Option<UserId>,
    ) -> Result<bool, DirectoryError> {
        simulate(self.latency.lookup).await;

        let users = self.users.read().await;
        Ok(Self::email_taken(&users, &normalize_email(email), excluding))
    }
}

/// Emails are stored and compared without surrounding whitespace.
fn normalize_email(email: &str) -> String {
    email.trim().to_string()
}
