//! Notification center: short-lived, non-blocking feedback messages.
//!
//! The center is constructed once per page and handed to every call site
//! that needs to notify the visitor. Clones share the same container.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use portal_domain::id::NotificationId;
use portal_domain::notification::{Notification, Severity};

use crate::config::NotificationConfig;
use crate::ports::{ContainerHandle, NotificationSurface};

/// Reference to a displayed notification, used to dismiss it early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle {
    id: NotificationId,
}

impl NotificationHandle {
    #[must_use]
    pub fn id(self) -> NotificationId {
        self.id
    }
}

#[derive(Debug, Default)]
struct CenterState {
    container: Option<ContainerHandle>,
    /// Active notifications, oldest first.
    active: Vec<NotificationId>,
}

struct Inner<S> {
    surface: S,
    config: NotificationConfig,
    state: Mutex<CenterState>,
}

impl<S: NotificationSurface> Inner<S> {
    fn lock(&self) -> MutexGuard<'_, CenterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_active(&self, id: NotificationId) -> bool {
        self.lock().active.contains(&id)
    }

    fn remove(&self, id: NotificationId) -> bool {
        let mut state = self.lock();
        let Some(pos) = state.active.iter().position(|active| *active == id) else {
            return false;
        };
        state.active.remove(pos);
        drop(state);
        self.surface.remove(id);
        true
    }
}

/// Displays notifications on a [`NotificationSurface`] and dismisses them on time.
pub struct NotificationCenter<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for NotificationCenter<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: NotificationSurface + 'static> NotificationCenter<S> {
    /// Create a center drawing on `surface`. The container is mounted lazily.
    pub fn new(surface: S, config: NotificationConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                surface,
                config,
                state: Mutex::new(CenterState::default()),
            }),
        }
    }

    /// Mount the shared container on first use and return it.
    pub fn ensure_container(&self) -> ContainerHandle {
        let mut state = self.inner.lock();
        if let Some(container) = &state.container {
            return container.clone();
        }
        let container = self.inner.surface.mount_container();
        tracing::debug!(element = container.element_id(), "notification container mounted");
        state.container = Some(container.clone());
        container
    }

    /// Show a notification.
    ///
    /// With `duration_ms > 0` the notification starts hiding after that delay
    /// and is removed once the hide transition is over. With `0` it stays
    /// until [`dismiss`](Self::dismiss) is called.
    pub fn show(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
    ) -> NotificationHandle {
        let container = self.ensure_container();
        let notification = Notification::new(title, message, severity, duration_ms);
        let handle = NotificationHandle {
            id: notification.id,
        };

        self.inner.lock().active.push(notification.id);
        self.inner.surface.append(&container, &notification);
        tracing::debug!(
            id = %notification.id,
            %severity,
            duration_ms,
            "notification shown"
        );

        if let Some(delay) = notification.auto_dismiss() {
            self.schedule_removal(notification.id, delay);
        }

        handle
    }

    /// Remove a notification right away.
    ///
    /// Returns `false` when it was already gone, which is not an error.
    pub fn dismiss(&self, handle: NotificationHandle) -> bool {
        let removed = self.inner.remove(handle.id);
        if removed {
            tracing::debug!(id = %handle.id, "notification dismissed");
        }
        removed
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationHandle {
        self.show(title, message, Severity::Info, self.inner.config.default_duration_ms)
    }

    pub fn success(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationHandle {
        self.show(
            title,
            message,
            Severity::Success,
            self.inner.config.default_duration_ms,
        )
    }

    pub fn warning(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationHandle {
        self.show(
            title,
            message,
            Severity::Warning,
            self.inner.config.default_duration_ms,
        )
    }

    pub fn error(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationHandle {
        self.show(
            title,
            message,
            Severity::Error,
            self.inner.config.default_duration_ms,
        )
    }

    /// Whether the notification is still in the container.
    #[must_use]
    pub fn contains(&self, handle: NotificationHandle) -> bool {
        self.inner.is_active(handle.id)
    }

    /// Active notifications in insertion order.
    #[must_use]
    pub fn active(&self) -> Vec<NotificationId> {
        self.inner.lock().active.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().active.is_empty()
    }

    fn schedule_removal(&self, id: NotificationId, delay: Duration) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !inner.is_active(id) {
                return;
            }
            inner.surface.begin_hide(id);
            tokio::time::sleep(inner.config.hide_transition()).await;
            if inner.remove(id) {
                tracing::debug!(%id, "notification expired");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Mount,
        Append(NotificationId, String, Severity),
        Hide(NotificationId),
        Remove(NotificationId),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Mutex<Vec<Call>>,
    }

    impl RecordingSurface {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl NotificationSurface for RecordingSurface {
        fn mount_container(&self) -> ContainerHandle {
            self.calls.lock().unwrap().push(Call::Mount);
            ContainerHandle::new("notificationContainer")
        }

        fn append(&self, _container: &ContainerHandle, notification: &Notification) {
            self.calls.lock().unwrap().push(Call::Append(
                notification.id,
                notification.title.clone(),
                notification.severity,
            ));
        }

        fn begin_hide(&self, id: NotificationId) {
            self.calls.lock().unwrap().push(Call::Hide(id));
        }

        fn remove(&self, id: NotificationId) {
            self.calls.lock().unwrap().push(Call::Remove(id));
        }
    }

    fn make_center() -> (NotificationCenter<Arc<RecordingSurface>>, Arc<RecordingSurface>) {
        let surface = Arc::new(RecordingSurface::default());
        let center = NotificationCenter::new(Arc::clone(&surface), NotificationConfig::default());
        (center, surface)
    }

    #[tokio::test]
    async fn should_mount_container_only_once() {
        let (center, surface) = make_center();

        let first = center.ensure_container();
        let second = center.ensure_container();
        center.show("a", "b", Severity::Info, 0);

        assert_eq!(first, second);
        let mounts = surface
            .calls()
            .into_iter()
            .filter(|call| *call == Call::Mount)
            .count();
        assert_eq!(mounts, 1);
    }

    #[tokio::test]
    async fn should_share_container_between_clones() {
        let (center, surface) = make_center();
        let other = center.clone();

        center.info("a", "b");
        other.info("c", "d");

        assert_eq!(center.len(), 2);
        assert_eq!(
            surface
                .calls()
                .iter()
                .filter(|call| **call == Call::Mount)
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn should_keep_insertion_order() {
        let (center, _surface) = make_center();
        let a = center.show("a", "", Severity::Info, 0);
        let b = center.show("b", "", Severity::Info, 0);
        let c = center.show("c", "", Severity::Info, 0);

        assert_eq!(center.active(), vec![a.id(), b.id(), c.id()]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_persistent_notification_until_dismissed() {
        let (center, surface) = make_center();
        let handle = center.show("Sticky", "stays", Severity::Warning, 0);

        tokio::time::sleep(Duration::from_secs(24 * 3600)).await;
        assert!(center.contains(handle));

        assert!(center.dismiss(handle));
        assert!(!center.contains(handle));
        assert_eq!(surface.calls().last(), Some(&Call::Remove(handle.id())));
    }

    #[tokio::test(start_paused = true)]
    async fn should_hide_then_remove_after_duration() {
        let (center, surface) = make_center();
        let handle = center.show("Timed", "goes away", Severity::Info, 1_000);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(center.contains(handle));
        assert!(!surface.calls().contains(&Call::Hide(handle.id())));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(surface.calls().contains(&Call::Hide(handle.id())));
        assert!(center.contains(handle));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!center.contains(handle));
        assert_eq!(surface.calls().last(), Some(&Call::Remove(handle.id())));
    }

    #[tokio::test(start_paused = true)]
    async fn should_use_default_duration_for_shortcuts() {
        let (center, _surface) = make_center();
        let handle = center.success("Connected", "ok");

        tokio::time::sleep(Duration::from_millis(5_000 + 299)).await;
        assert!(center.contains(handle));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!center.contains(handle));
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_touch_surface_when_timer_fires_after_manual_dismiss() {
        let (center, surface) = make_center();
        let handle = center.show("Early", "closed by hand", Severity::Info, 1_000);

        assert!(center.dismiss(handle));
        let calls_after_dismiss = surface.calls().len();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(surface.calls().len(), calls_after_dismiss);
    }

    #[tokio::test]
    async fn should_treat_second_dismiss_as_noop() {
        let (center, surface) = make_center();
        let handle = center.show("Once", "", Severity::Error, 0);

        assert!(center.dismiss(handle));
        assert!(!center.dismiss(handle));

        let removes = surface
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Remove(_)))
            .count();
        assert_eq!(removes, 1);
    }

    #[tokio::test]
    async fn should_map_shortcuts_to_severities() {
        let (center, surface) = make_center();
        center.info("i", "");
        center.success("s", "");
        center.warning("w", "");
        center.error("e", "");

        let severities: Vec<Severity> = surface
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Append(_, _, severity) => Some(severity),
                _ => None,
            })
            .collect();
        assert_eq!(
            severities,
            vec![
                Severity::Info,
                Severity::Success,
                Severity::Warning,
                Severity::Error
            ]
        );
    }
}
