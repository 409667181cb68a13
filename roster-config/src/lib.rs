//! Shared configuration loading and runtime wiring for Roster.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod runtime;

pub use loader::{CONFIG_JSON_VAR, CONFIG_PATH_VAR, ConfigSource};
pub use models::{ConfigGuardRailError, LatencyConfig, RosterConfig};
pub use runtime::RosterRuntime;
