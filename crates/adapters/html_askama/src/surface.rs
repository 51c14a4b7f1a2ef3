//! The page model behind [`HtmlSurface`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use askama::Template;

use portal_app::ports::{ContainerHandle, CountdownDisplay, NotificationSurface};
use portal_domain::countdown::CountdownStyle;
use portal_domain::id::NotificationId;
use portal_domain::notification::Notification;

use crate::CONTAINER_ID;
use crate::templates::{ContainerTemplate, CountdownTemplate, NotificationTemplate};

#[derive(Debug)]
struct Node {
    notification: Notification,
    hiding: bool,
}

#[derive(Debug, Default)]
struct Countdown {
    remaining: String,
    expiry: String,
    style: CountdownStyle,
}

#[derive(Debug, Default)]
struct Document {
    container_mounted: bool,
    nodes: Vec<Node>,
    countdown: Countdown,
}

/// In-memory HTML page holding the notification container and the countdown.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    document: Mutex<Document>,
}

impl HtmlSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Render the notification container, or an empty string if it was never mounted.
    ///
    /// # Errors
    ///
    /// Returns the askama error if a template fails to render.
    pub fn notifications_html(&self) -> Result<String, askama::Error> {
        let document = self.lock();
        if !document.container_mounted {
            return Ok(String::new());
        }

        let nodes = document
            .nodes
            .iter()
            .map(|node| {
                NotificationTemplate {
                    id: node.notification.id.to_string(),
                    class: node.notification.severity.css_class(),
                    icon: node.notification.severity.icon(),
                    title: &node.notification.title,
                    message: &node.notification.message,
                    hiding: node.hiding,
                }
                .render()
            })
            .collect::<Result<Vec<_>, _>>()?;

        ContainerTemplate {
            element_id: CONTAINER_ID,
            nodes,
        }
        .render()
    }

    /// Render the countdown and expiry lines.
    ///
    /// # Errors
    ///
    /// Returns the askama error if the template fails to render.
    pub fn countdown_html(&self) -> Result<String, askama::Error> {
        let document = self.lock();
        CountdownTemplate {
            class: document.countdown.style.css_class(),
            remaining: &document.countdown.remaining,
            expiry: &document.countdown.expiry,
        }
        .render()
    }

    /// Number of notification nodes currently in the container.
    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.lock().nodes.len()
    }

    #[must_use]
    pub fn countdown_style(&self) -> CountdownStyle {
        self.lock().countdown.style
    }
}

impl NotificationSurface for HtmlSurface {
    fn mount_container(&self) -> ContainerHandle {
        let mut document = self.lock();
        if !document.container_mounted {
            document.container_mounted = true;
            tracing::trace!(element = CONTAINER_ID, "container element created");
        }
        ContainerHandle::new(CONTAINER_ID)
    }

    fn append(&self, _container: &ContainerHandle, notification: &Notification) {
        self.lock().nodes.push(Node {
            notification: notification.clone(),
            hiding: false,
        });
    }

    fn begin_hide(&self, id: NotificationId) {
        if let Some(node) = self
            .lock()
            .nodes
            .iter_mut()
            .find(|node| node.notification.id == id)
        {
            node.hiding = true;
        }
    }

    fn remove(&self, id: NotificationId) {
        self.lock().nodes.retain(|node| node.notification.id != id);
    }
}

impl CountdownDisplay for HtmlSurface {
    fn set_remaining(&self, text: &str) {
        text.clone_into(&mut self.lock().countdown.remaining);
    }

    fn set_expiry(&self, text: &str) {
        text.clone_into(&mut self.lock().countdown.expiry);
    }

    fn set_style(&self, style: CountdownStyle) {
        self.lock().countdown.style = style;
    }
}
