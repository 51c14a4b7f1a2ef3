//! Notification: a short-lived, non-blocking message shown to the visitor.
//!
//! A notification is created on demand, owned by the notification container
//! for its lifetime, and destroyed on dismissal. It is never mutated or
//! reused after that.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::id::NotificationId;

/// How long a notification stays on screen when no duration is given.
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Length of the "hide" transition that precedes removal of a timed notification.
pub const HIDE_TRANSITION_MS: u64 = 300;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Short glyph rendered in the icon slot.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "OK",
            Self::Warning => "!",
            Self::Error => "X",
        }
    }

    /// Style class applied to the notification node.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notification-info",
            Self::Success => "notification-success",
            Self::Warning => "notification-warning",
            Self::Error => "notification-error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Success => f.write_str("success"),
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A single user-facing message.
///
/// `title` and `message` are plain text. Presentation surfaces must render
/// them as text, never as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// `0` keeps the notification until it is dismissed explicitly.
    pub auto_dismiss_ms: u64,
}

impl Notification {
    /// Create a notification with a fresh identifier.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        auto_dismiss_ms: u64,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            message: message.into(),
            severity,
            auto_dismiss_ms,
        }
    }

    /// Delay before the hide transition starts, or `None` if the notification persists.
    #[must_use]
    pub fn auto_dismiss(&self) -> Option<Duration> {
        (self.auto_dismiss_ms > 0).then(|| Duration::from_millis(self.auto_dismiss_ms))
    }
}
