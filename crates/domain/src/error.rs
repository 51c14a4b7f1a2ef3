//! Common error types used across the workspace.
//!
//! Each failure has its own typed enum. Adapters map their transport errors
//! into these when crossing a port boundary.

/// Invariant violations detected while constructing domain values.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("session code must not be empty")]
    EmptySessionCode,

    #[error("session code is longer than {max} characters")]
    SessionCodeTooLong { max: usize },

    #[error("session code contains invalid character {0:?}")]
    InvalidSessionCodeChar(char),
}

/// Failure of a single status query.
///
/// None of these stop a polling schedule: the next tick retries on its own.
#[derive(Debug, thiserror::Error)]
pub enum StatusQueryError {
    /// The request never produced a response (DNS, connect, timeout, …).
    #[error("status request failed")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-2xx status.
    #[error("status endpoint returned HTTP {status}")]
    Http { status: u16 },

    /// The body was not a valid status document.
    #[error("failed to parse status response")]
    Parse(#[source] serde_json::Error),
}

/// Failure of the connectivity test round-trip.
#[derive(Debug, thiserror::Error)]
pub enum ConnectivityError {
    #[error("connection failed: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Response is not JSON: {body}")]
    NotJson { body: String },
}
