//! Tunables for the notification center and the status poller.

use std::time::Duration;

use serde::Deserialize;

use portal_domain::notification::{DEFAULT_DURATION_MS, HIDE_TRANSITION_MS};

/// Configuration for the [`NotificationCenter`](crate::notification_center::NotificationCenter).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Duration used by the `info`/`success`/`warning`/`error` shortcuts, in milliseconds.
    pub default_duration_ms: u64,
    /// Length of the hide transition before a timed notification is removed, in milliseconds.
    pub hide_transition_ms: u64,
}

impl NotificationConfig {
    #[must_use]
    pub fn hide_transition(&self) -> Duration {
        Duration::from_millis(self.hide_transition_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            hide_transition_ms: HIDE_TRANSITION_MS,
        }
    }
}

/// Configuration for the [`StatusPoller`](crate::status_poller::StatusPoller).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Interval between two status queries, in milliseconds.
    pub interval_ms: u64,
    /// Consecutive failed queries before a warning notification is raised.
    ///
    /// `0` disables the warning; failures are then only logged.
    pub failure_threshold: u32,
}

impl PollerConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2_000,
            failure_threshold: 3,
        }
    }
}
