use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use portal_app::ports::{ContainerHandle, CountdownDisplay, NotificationSurface};
use portal_domain::countdown::CountdownStyle;
use portal_domain::id::NotificationId;
use portal_domain::notification::Notification;

struct Output<W> {
    writer: W,
    last_expiry: String,
    style: CountdownStyle,
}

impl<W: Write> Output<W> {
    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.writer, "{text}").and_then(|()| self.writer.flush()) {
            tracing::warn!(%err, "failed to write to terminal");
        }
    }
}

/// Escape control characters so text from the server can neither break the
/// line nor drive the terminal.
fn printable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_control() {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}

/// [`NotificationSurface`] and [`CountdownDisplay`] writing to any [`Write`].
pub struct TerminalSurface<W> {
    output: Mutex<Output<W>>,
}

impl TerminalSurface<io::Stdout> {
    /// Surface printing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            output: Mutex::new(Output {
                writer,
                last_expiry: String::new(),
                style: CountdownStyle::default(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Output<W>> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> NotificationSurface for TerminalSurface<W> {
    fn mount_container(&self) -> ContainerHandle {
        ContainerHandle::new("stdout")
    }

    fn append(&self, _container: &ContainerHandle, notification: &Notification) {
        let icon = notification.severity.icon();
        let title = printable(&notification.title);
        let text = if notification.message.is_empty() {
            format!("[{icon}] {title}")
        } else {
            format!("[{icon}] {title}: {}", printable(&notification.message))
        };
        self.lock().line(&text);
    }

    fn begin_hide(&self, id: NotificationId) {
        tracing::trace!(%id, "notification hiding");
    }

    fn remove(&self, id: NotificationId) {
        tracing::trace!(%id, "notification removed");
    }
}

impl<W: Write + Send> CountdownDisplay for TerminalSurface<W> {
    fn set_remaining(&self, text: &str) {
        self.lock().line(&format!("Time left: {}", printable(text)));
    }

    fn set_expiry(&self, text: &str) {
        let mut output = self.lock();
        if output.last_expiry == text {
            return;
        }
        text.clone_into(&mut output.last_expiry);
        output.line(&printable(text));
    }

    fn set_style(&self, style: CountdownStyle) {
        let mut output = self.lock();
        if output.style == style {
            return;
        }
        output.style = style;
        if style == CountdownStyle::Expired {
            output.line("Session expired");
        }
    }
}
