//! Mock session gate
//!
//! Stands in for the login screen's backend: any non-empty email/password
//! pair signs in after the login latency. There is no credential check and
//! nothing survives the process; the gate only answers "is someone signed
//! in, and with which role" for the route guard and the admin screens.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use roster_model::UserRole;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::latency::{LatencyProfile, simulate};

const MOCK_TOKEN: &str = "mock-session-token";

/// The signed-in operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub role: UserRole,
    token: String,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Errors that can occur while signing in
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("email and password are required")]
    MissingCredentials,
}

/// Cloneable handle to the process-wide sign-in state.
#[derive(Clone)]
pub struct SessionGate {
    session: Arc<RwLock<Option<Session>>>,
    status: Arc<watch::Sender<bool>>,
    latency: LatencyProfile,
    actor_role: UserRole,
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate")
            .field("authenticated", &self.is_authenticated())
            .field("actor_role", &self.actor_role)
            .finish()
    }
}

impl SessionGate {
    /// Create a signed-out gate. Successful logins are granted `actor_role`.
    pub fn new(latency: LatencyProfile, actor_role: UserRole) -> Self {
        let (status, _) = watch::channel(false);
        Self {
            session: Arc::new(RwLock::new(None)),
            status: Arc::new(status),
            latency,
            actor_role,
        }
    }

    /// Sign in. Both fields must be non-blank.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        simulate(self.latency.login).await;

        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            debug!("login rejected: missing credentials");
            return Err(SessionError::MissingCredentials);
        }

        let session = Session {
            email: email.to_string(),
            role: self.actor_role,
            token: MOCK_TOKEN.to_string(),
        };
        *self.session.write() = Some(session.clone());
        self.status.send_replace(true);

        info!(email = %session.email, role = %session.role, "signed in");
        Ok(session)
    }

    pub fn logout(&self) {
        if self.session.write().take().is_some() {
            info!("signed out");
        }
        self.status.send_replace(false);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn current_role(&self) -> Option<UserRole> {
        self.session.read().as_ref().map(|session| session.role)
    }

    /// Authentication status stream; the current value is always available.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.status.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SessionGate {
        SessionGate::new(LatencyProfile::instant(), UserRole::Manager)
    }

    #[tokio::test]
    async fn login_requires_both_fields() {
        let gate = gate();
        assert_eq!(
            gate.login("", "secret").await,
            Err(SessionError::MissingCredentials)
        );
        assert_eq!(
            gate.login("ops@example.com", "  ").await,
            Err(SessionError::MissingCredentials)
        );
        assert!(!gate.is_authenticated());
    }

    #[tokio::test]
    async fn login_and_logout_update_status() {
        let gate = gate();
        let mut status = gate.subscribe();
        assert!(!*status.borrow());

        let session = gate.login("ops@example.com", "secret").await.unwrap();
        assert_eq!(session.role, UserRole::Manager);
        assert_eq!(session.token(), MOCK_TOKEN);
        assert!(status.has_changed().unwrap());
        assert!(*status.borrow_and_update());
        assert_eq!(gate.current_role(), Some(UserRole::Manager));

        gate.logout();
        assert!(!*status.borrow_and_update());
        assert_eq!(gate.current_session(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_for_latency() {
        let gate = SessionGate::new(LatencyProfile::default(), UserRole::Admin);
        let started = tokio::time::Instant::now();
        gate.login("ops@example.com", "secret").await.unwrap();
        assert!(started.elapsed() >= LatencyProfile::default().login);
    }
}
