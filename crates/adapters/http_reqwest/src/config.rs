//! HTTP adapter configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where the portal server lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL of the portal server (e.g. `http://10.5.50.1:5000`).
    pub base_url: String,
    /// Per-request timeout, in seconds.
    pub request_timeout_secs: u64,
}

impl HttpConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 10,
        }
    }
}
