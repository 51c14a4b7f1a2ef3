//! Voucher login page: notifications raised by page events.

use crate::notification_center::{NotificationCenter, NotificationHandle};
use crate::ports::NotificationSurface;

/// Notifications raised while the visitor is on the voucher login page.
pub struct PortalPage<S> {
    notifications: NotificationCenter<S>,
}

impl<S: NotificationSurface + 'static> PortalPage<S> {
    pub fn new(notifications: NotificationCenter<S>) -> Self {
        Self { notifications }
    }

    /// Greet the visitor once the page has loaded.
    pub fn on_load(&self) -> NotificationHandle {
        self.notifications.info(
            "WiFi Portal",
            "Enter your voucher code to access the internet",
        )
    }

    /// Acknowledge a submitted voucher code while the server validates it.
    ///
    /// The code is shown verbatim; the surface is responsible for rendering it as text.
    pub fn on_submit(&self, code: &str) -> NotificationHandle {
        tracing::debug!(code, "voucher code submitted");
        self.notifications
            .info("Processing", format!("Validating code: {code}..."))
    }
}
