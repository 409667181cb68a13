use std::time::Duration;

use roster_core::LatencyProfile;
use roster_model::UserRole;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level settings for a Roster process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Simulated backend delays. Lower them for snappier demos; zero them
    /// for scripted runs.
    pub latency: LatencyConfig,
    /// Start with the built-in sample users instead of an empty directory.
    pub seed_sample_users: bool,
    /// Role granted to whoever signs in.
    pub actor_role: UserRole,
    /// Rows per page in listings.
    pub page_size: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            seed_sample_users: true,
            actor_role: UserRole::Admin,
            page_size: 10,
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        if self.page_size == 0 {
            return Err(ConfigGuardRailError::ZeroPageSize);
        }
        if self.latency.query_timeout_ms == 0 {
            return Err(ConfigGuardRailError::ZeroQueryTimeout);
        }
        Ok(())
    }
}

/// Per-operation delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub list_ms: u64,
    pub mutation_ms: u64,
    pub lookup_ms: u64,
    pub login_ms: u64,
    /// How long a listing may wait for the directory before failing.
    pub query_timeout_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        LatencyProfile::default().into()
    }
}

impl From<LatencyProfile> for LatencyConfig {
    fn from(profile: LatencyProfile) -> Self {
        Self {
            list_ms: saturating_millis(profile.list),
            mutation_ms: saturating_millis(profile.mutation),
            lookup_ms: saturating_millis(profile.lookup),
            login_ms: saturating_millis(profile.login),
            query_timeout_ms: saturating_millis(profile.query_timeout),
        }
    }
}

fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl From<LatencyConfig> for LatencyProfile {
    fn from(config: LatencyConfig) -> Self {
        Self {
            list: Duration::from_millis(config.list_ms),
            mutation: Duration::from_millis(config.mutation_ms),
            lookup: Duration::from_millis(config.lookup_ms),
            login: Duration::from_millis(config.login_ms),
            query_timeout: Duration::from_millis(config.query_timeout_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigGuardRailError {
    #[error("page_size must be at least 1")]
    ZeroPageSize,
    #[error("latency.query_timeout_ms must be greater than zero")]
    ZeroQueryTimeout,
}
