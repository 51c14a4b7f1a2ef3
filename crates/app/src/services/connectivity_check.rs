//! Connectivity check: the "Test Connection" flow of the portal page.

use portal_domain::connectivity::ConnectivityReport;
use portal_domain::error::ConnectivityError;

use crate::notification_center::NotificationCenter;
use crate::ports::{ConnectivityProbe, NotificationSurface};

/// Probes the portal server and tells the visitor how it went.
pub struct ConnectivityCheck<P, S> {
    probe: P,
    notifications: NotificationCenter<S>,
}

impl<P, S> ConnectivityCheck<P, S>
where
    P: ConnectivityProbe + Sync,
    S: NotificationSurface + 'static,
{
    pub fn new(probe: P, notifications: NotificationCenter<S>) -> Self {
        Self {
            probe,
            notifications,
        }
    }

    /// Run one probe, raising a notification before and after.
    ///
    /// # Errors
    ///
    /// Returns the [`ConnectivityError`] reported by the probe; the visitor
    /// has already been notified when this happens.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self) -> Result<ConnectivityReport, ConnectivityError> {
        self.notifications.info("Testing", "Checking connection to server...");

        match self.probe.probe().await {
            Ok(report) => {
                tracing::info!(
                    client_ip = report.client_ip.as_deref().unwrap_or("unknown"),
                    "connectivity check succeeded"
                );
                self.notifications
                    .success("Connected", "Server is responding correctly!");
                Ok(report)
            }
            Err(err) => {
                tracing::warn!(%err, "connectivity check failed");
                self.notifications.error("Connection Failed", err.to_string());
                Err(err)
            }
        }
    }
}
