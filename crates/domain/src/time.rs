//! Time and timestamp helpers.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// UTC timestamp used for expiry times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an ISO-8601 timestamp as sent by the portal server.
///
/// The server may emit either an RFC 3339 string with an offset or a naive
/// `YYYY-MM-DDTHH:MM:SS[.ffffff]` value; naive values are read as UTC.
#[must_use]
pub fn parse_iso8601(input: &str) -> Option<Timestamp> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Render a timestamp as an absolute time in the host's local time zone.
#[must_use]
pub fn format_local(ts: Timestamp) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
