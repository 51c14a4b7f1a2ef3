//! Countdown display port: the element showing remaining session time.

use std::sync::Arc;

use portal_domain::countdown::CountdownStyle;

/// Mutations the status poller applies to the countdown element.
pub trait CountdownDisplay: Send + Sync {
    /// Replace the remaining-time text.
    fn set_remaining(&self, text: &str);

    /// Replace the absolute expiry text.
    fn set_expiry(&self, text: &str);

    /// Switch the visual treatment of the countdown.
    fn set_style(&self, style: CountdownStyle);
}

impl<T: CountdownDisplay> CountdownDisplay for Arc<T> {
    fn set_remaining(&self, text: &str) {
        (**self).set_remaining(text);
    }

    fn set_expiry(&self, text: &str) {
        (**self).set_expiry(text);
    }

    fn set_style(&self, style: CountdownStyle) {
        (**self).set_style(style);
    }
}
