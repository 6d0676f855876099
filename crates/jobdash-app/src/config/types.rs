//! Configuration types for jobdash

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lower bound for the follow interval, to keep the poller from spinning
pub const FOLLOW_INTERVAL_MIN_MS: u64 = 10;

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub follow: FollowSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerSettings {
    /// Base URL every endpoint is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds (not applied to run streams)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ServerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Live-follow behaviour on the run screen
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FollowSettings {
    /// Time between scroll steps
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Lines to advance per step
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,
}

impl Default for FollowSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            scroll_step: default_scroll_step(),
        }
    }
}

impl FollowSettings {
    /// Poll period, clamped to [`FOLLOW_INTERVAL_MIN_MS`]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(FOLLOW_INTERVAL_MIN_MS))
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UiSettings {
    /// Path navigated to at startup
    #[serde(default = "default_route")]
    pub default_route: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_route: default_route(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_interval_ms() -> u64 {
    100
}

fn default_scroll_step() -> usize {
    5
}

fn default_route() -> String {
    crate::router::DEFAULT_ROUTE.to_string()
}
