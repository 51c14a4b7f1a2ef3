//! Status poller: keeps the countdown in sync with the server's view of a session.
//!
//! ```text
//! Idle ──start──▶ Polling ──expired snapshot──▶ Expired
//!   │                 ▲  │
//!   │ (exempt code)   └──┘ every `interval`
//!   ▼
//! Idle (no queries, display untouched)
//! ```
//!
//! Stopping the handle from `Polling` or `Expired` returns to `Idle`.
//!
//! Each tick spawns its own query, so a slow response can still be in flight
//! when the next tick fires. Responses carry the sequence number of the tick
//! that issued them and anything older than the last applied response is
//! dropped, failures included, so a late error cannot extend a failure
//! streak that a newer success already ended. Once expired, the countdown keeps its expired treatment even if a
//! later snapshot reports the session as active again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use portal_domain::countdown::{CountdownStyle, CountdownView};
use portal_domain::error::StatusQueryError;
use portal_domain::session::SessionCode;
use portal_domain::status::StatusSnapshot;

use crate::config::PollerConfig;
use crate::notification_center::NotificationCenter;
use crate::ports::{CountdownDisplay, NotificationSurface, StatusQuery};

/// Lifecycle of a poller, as seen by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollerState {
    #[default]
    Idle,
    Polling,
    Expired,
}

#[derive(Debug, Default)]
struct Progress {
    state: PollerState,
    /// Style the countdown currently shows; the page starts in the active treatment.
    shown_style: CountdownStyle,
    last_applied: Option<u64>,
    consecutive_failures: u32,
    failure_reported: bool,
    /// Set by [`PollerHandle::stop`]; late responses are ignored afterwards.
    stopped: bool,
}

type SharedProgress = Arc<Mutex<Progress>>;

fn lock(progress: &Mutex<Progress>) -> MutexGuard<'_, Progress> {
    progress.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Engine<Q, D, S> {
    query: Q,
    display: D,
    notifications: NotificationCenter<S>,
    config: PollerConfig,
    progress: SharedProgress,
    next_seq: AtomicU64,
}

impl<Q, D, S> Engine<Q, D, S>
where
    Q: StatusQuery + Send + Sync + 'static,
    D: CountdownDisplay + 'static,
    S: NotificationSurface + 'static,
{
    async fn query_once(&self, code: &SessionCode) -> Result<StatusSnapshot, StatusQueryError> {
        let result = self.query.query(code).await;
        match &result {
            Ok(snapshot) => tracing::trace!(
                %code,
                active = snapshot.active,
                remaining_seconds = snapshot.remaining_seconds,
                "status received"
            ),
            Err(err) => tracing::warn!(%err, %code, "status query failed, retrying next interval"),
        }
        result
    }

    fn render_locked(&self, progress: &mut Progress, snapshot: &StatusSnapshot) {
        let view = CountdownView::from_snapshot(snapshot);
        self.display.set_remaining(&view.remaining);
        if let Some(expiry) = &view.expiry {
            self.display.set_expiry(expiry);
        }
        if let Some(style) = view.style {
            progress.state = PollerState::Expired;
            if progress.shown_style != style {
                self.display.set_style(style);
                progress.shown_style = style;
                tracing::info!("session expired");
            }
        }
    }

    fn render(&self, snapshot: &StatusSnapshot) {
        let mut progress = lock(&self.progress);
        self.render_locked(&mut progress, snapshot);
    }

    fn apply(&self, seq: u64, result: Result<StatusSnapshot, StatusQueryError>) {
        let mut progress = lock(&self.progress);
        if progress.stopped {
            return;
        }
        // A failure older than the last applied snapshot belongs to a streak
        // that has already ended.
        if progress.last_applied.is_some_and(|last| seq < last) {
            tracing::debug!(seq, ok = result.is_ok(), "discarding out-of-order status response");
            return;
        }
        match result {
            Ok(snapshot) => {
                progress.last_applied = Some(seq);
                progress.consecutive_failures = 0;
                progress.failure_reported = false;
                self.render_locked(&mut progress, &snapshot);
            }
            Err(_) => {
                progress.consecutive_failures += 1;
                let threshold = self.config.failure_threshold;
                if threshold == 0
                    || progress.failure_reported
                    || progress.consecutive_failures < threshold
                {
                    return;
                }
                progress.failure_reported = true;
                let failures = progress.consecutive_failures;
                drop(progress);
                tracing::warn!(failures, "status unavailable, notifying visitor");
                self.notifications.warning(
                    "Connection issue",
                    "Unable to refresh your session time. Retrying...",
                );
            }
        }
    }
}

async fn run<Q, D, S>(engine: Arc<Engine<Q, D, S>>, code: SessionCode)
where
    Q: StatusQuery + Send + Sync + 'static,
    D: CountdownDisplay + 'static,
    S: NotificationSurface + 'static,
{
    let mut ticker = tokio::time::interval(engine.config.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let seq = engine.next_seq.fetch_add(1, Ordering::Relaxed);
                let engine = Arc::clone(&engine);
                let code = code.clone();
                in_flight.spawn(async move {
                    let result = engine.query_once(&code).await;
                    engine.apply(seq, result);
                });
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(err) = joined {
                    tracing::error!(%err, "status query task failed");
                }
            }
        }
    }
}

/// Handle on a running (or bypassed) polling schedule.
///
/// Dropping the handle stops the schedule and cancels queries still in flight.
#[derive(Debug)]
pub struct PollerHandle {
    progress: SharedProgress,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    #[must_use]
    pub fn state(&self) -> PollerState {
        lock(&self.progress).state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the schedule and return to [`PollerState::Idle`]. Calling it
    /// again does nothing.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let mut progress = lock(&self.progress);
            progress.stopped = true;
            progress.state = PollerState::Idle;
            tracing::debug!("status polling stopped");
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Polls a [`StatusQuery`] and renders the result on a [`CountdownDisplay`].
///
/// Repeated query failures are reported once per failure streak through the
/// [`NotificationCenter`].
pub struct StatusPoller<Q, D, S> {
    engine: Arc<Engine<Q, D, S>>,
}

impl<Q, D, S> StatusPoller<Q, D, S>
where
    Q: StatusQuery + Send + Sync + 'static,
    D: CountdownDisplay + 'static,
    S: NotificationSurface + 'static,
{
    pub fn new(
        query: Q,
        display: D,
        notifications: NotificationCenter<S>,
        config: PollerConfig,
    ) -> Self {
        Self {
            engine: Arc::new(Engine {
                query,
                display,
                notifications,
                config,
                progress: SharedProgress::default(),
                next_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Query once right away, then every configured interval until the
    /// returned handle is stopped or dropped.
    ///
    /// Exempt sessions are never polled and the display is left untouched.
    #[tracing::instrument(skip(self, code), fields(code = %code))]
    pub fn start(&self, code: SessionCode, is_exempt: bool) -> PollerHandle {
        let progress = Arc::clone(&self.engine.progress);
        if is_exempt {
            tracing::info!("exempt session, status polling disabled");
            return PollerHandle {
                progress,
                task: None,
            };
        }

        {
            let mut progress = lock(&progress);
            progress.state = PollerState::Polling;
            progress.stopped = false;
        }
        let task = tokio::spawn(run(Arc::clone(&self.engine), code));
        tracing::info!(
            interval_ms = self.engine.config.interval_ms,
            "status polling started"
        );

        PollerHandle {
            progress,
            task: Some(task),
        }
    }

    /// Run a single status query. Failures are logged and returned.
    ///
    /// # Errors
    ///
    /// Returns the [`StatusQueryError`] reported by the status query port.
    pub async fn query_once(&self, code: &SessionCode) -> Result<StatusSnapshot, StatusQueryError> {
        self.engine.query_once(code).await
    }

    /// Write a snapshot to the countdown display.
    pub fn render(&self, snapshot: &StatusSnapshot) {
        self.engine.render(snapshot);
    }

    #[must_use]
    pub fn state(&self) -> PollerState {
        lock(&self.engine.progress).state
    }
}
