//! Simulated round-trip latency for the mock services.
//!
//! Every directory and session call sleeps for a configurable delay before it
//! touches state, standing in for the network hop a real backend would add.

use std::time::Duration;

/// Per-operation delays applied by the in-memory services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay before a listing is computed
    pub list: Duration,
    /// Delay before create/update/status/delete apply
    pub mutation: Duration,
    /// Delay before single-record reads and email checks
    pub lookup: Duration,
    /// Delay before a login attempt resolves
    pub login: Duration,
    /// Upper bound on waiting for the directory lock during a listing
    pub query_timeout: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            mutation: Duration::from_millis(300),
            lookup: Duration::from_millis(500),
            login: Duration::from_millis(1_000),
            query_timeout: Duration::from_secs(5),
        }
    }
}

impl LatencyProfile {
    /// No artificial delay; the query timeout keeps its default.
    pub fn instant() -> Self {
        Self {
            list: Duration::ZERO,
            mutation: Duration::ZERO,
            lookup: Duration::ZERO,
            login: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }
}

pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
