//! Status snapshot: one point-in-time answer of the session status endpoint.
//!
//! Wire format (`GET /api/status/{code}`):
//!
//! ```json
//! {"active": true, "remaining_seconds": 3540, "mac": "A4:C1:…", "expiry_time": "2025-03-01T12:00:00+00:00"}
//! ```
//!
//! Unknown codes are answered with `{"active": false, "remaining_seconds": 0}`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StatusQueryError;
use crate::time::{Timestamp, parse_iso8601};

/// Session status as reported by the server.
///
/// Each poll produces a fresh snapshot that fully replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub active: bool,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub remaining_seconds: i64,
    #[serde(
        default,
        rename = "expiry_time",
        deserialize_with = "lenient_timestamp"
    )]
    pub expiry_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
}

impl StatusSnapshot {
    #[must_use]
    pub fn active(remaining_seconds: i64) -> Self {
        Self {
            active: true,
            remaining_seconds,
            expiry_timestamp: None,
            mac: None,
        }
    }

    #[must_use]
    pub fn expired() -> Self {
        Self {
            active: false,
            remaining_seconds: 0,
            expiry_timestamp: None,
            mac: None,
        }
    }

    #[must_use]
    pub fn with_expiry(mut self, expiry: Timestamp) -> Self {
        self.expiry_timestamp = Some(expiry);
        self
    }

    /// A session is over once the server says so or no time is left.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        !self.active || self.remaining_seconds <= 0
    }

    /// Decode a status document.
    ///
    /// # Errors
    ///
    /// Returns [`StatusQueryError::Parse`] when the body is not a valid
    /// status document.
    pub fn from_json(body: &[u8]) -> Result<Self, StatusQueryError> {
        serde_json::from_slice(body).map_err(StatusQueryError::Parse)
    }
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let parsed = parse_iso8601(&raw);
    if parsed.is_none() {
        tracing::warn!(expiry_time = %raw, "ignoring unparsable expiry time");
    }
    Ok(parsed)
}
