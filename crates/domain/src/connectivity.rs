//! Connectivity test: a round-trip to the portal's `/test` endpoint.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Body posted to the test endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectivityRequest {
    pub message: String,
    pub timestamp: Timestamp,
}

impl ConnectivityRequest {
    #[must_use]
    pub fn hello(timestamp: Timestamp) -> Self {
        Self {
            message: "Hello from phone!".to_string(),
            timestamp,
        }
    }
}

/// What the server tells us back on a successful test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityReport {
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
    #[serde(default)]
    pub client_ip: Option<String>,
    #[serde(default)]
    pub server_time: Option<String>,
}
