//! Notification surface port: where notifications are drawn.
//!
//! The surface owns the presentation of a single shared container. It never
//! decides *when* a notification goes away; the
//! [`NotificationCenter`](crate::notification_center::NotificationCenter) does.

use std::sync::Arc;

use portal_domain::id::NotificationId;
use portal_domain::notification::Notification;

/// Opaque reference to the mounted notification container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerHandle(String);

impl ContainerHandle {
    #[must_use]
    pub fn new(element_id: impl Into<String>) -> Self {
        Self(element_id.into())
    }

    /// Identifier of the container element on the surface.
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.0
    }
}

/// Presentation capability used by the notification center.
///
/// `title` and `message` must be rendered as text, never interpreted as markup.
pub trait NotificationSurface: Send + Sync {
    /// Create the container if it does not exist yet. Must be idempotent.
    fn mount_container(&self) -> ContainerHandle;

    /// Append a notification at the end of the container.
    fn append(&self, container: &ContainerHandle, notification: &Notification);

    /// Start the hide transition of a notification that is about to be removed.
    fn begin_hide(&self, id: NotificationId);

    /// Remove a notification. Unknown ids are ignored.
    fn remove(&self, id: NotificationId);
}

impl<T: NotificationSurface> NotificationSurface for Arc<T> {
    fn mount_container(&self) -> ContainerHandle {
        (**self).mount_container()
    }

    fn append(&self, container: &ContainerHandle, notification: &Notification) {
        (**self).append(container, notification);
    }

    fn begin_hide(&self, id: NotificationId) {
        (**self).begin_hide(id);
    }

    fn remove(&self, id: NotificationId) {
        (**self).remove(id);
    }
}
