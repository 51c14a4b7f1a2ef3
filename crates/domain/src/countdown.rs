//! Countdown: what the status page shows for a given snapshot.

use serde::{Deserialize, Serialize};

use crate::duration::format_duration;
use crate::status::StatusSnapshot;
use crate::time::format_local;

/// Visual treatment of the countdown element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownStyle {
    #[default]
    Active,
    Expired,
}

impl CountdownStyle {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Active => "text-green-600",
            Self::Expired => "text-red-600",
        }
    }
}

/// Projection of a [`StatusSnapshot`] onto the countdown display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownView {
    /// Remaining time, e.g. `1h 1m 1s`.
    pub remaining: String,
    /// `Expires: <local time>` when the server sent an expiry timestamp.
    pub expiry: Option<String>,
    /// `None` leaves the current treatment untouched.
    pub style: Option<CountdownStyle>,
}

impl CountdownView {
    /// Build the view for a snapshot.
    ///
    /// Only an expired snapshot forces a style; an active one keeps whatever
    /// the display currently shows.
    #[must_use]
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        Self {
            remaining: format_duration(snapshot.remaining_seconds),
            expiry: snapshot
                .expiry_timestamp
                .map(|ts| format!("Expires: {}", format_local(ts))),
            style: snapshot.is_expired().then_some(CountdownStyle::Expired),
        }
    }
}
