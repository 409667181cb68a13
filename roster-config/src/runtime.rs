use std::sync::Arc;

use roster_core::{InMemoryDirectory, LatencyProfile, SessionGate, UserAdministration};
use tracing::info;

use crate::models::RosterConfig;

/// The services one Roster process hosts, wired from configuration.
#[derive(Debug, Clone)]
pub struct RosterRuntime {
    pub directory: Arc<InMemoryDirectory>,
    pub session: SessionGate,
    pub admin: UserAdministration,
    pub page_size: usize,
}

impl RosterRuntime {
    pub fn from_config(config: &RosterConfig) -> Self {
        let latency = LatencyProfile::from(config.latency);

        let directory = Arc::new(if config.seed_sample_users {
            InMemoryDirectory::seeded(latency)
        } else {
            InMemoryDirectory::new(latency)
        });
        let session = SessionGate::new(latency, config.actor_role);
        let admin = UserAdministration::new(directory.clone(), session.clone());

        info!(
            seeded = config.seed_sample_users,
            actor_role = %config.actor_role,
            "roster runtime ready"
        );

        Self {
            directory,
            session,
            admin,
            page_size: config.page_size,
        }
    }
}
