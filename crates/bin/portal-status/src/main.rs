//! # portal-status: captive-portal session follower
//!
//! Composition root that wires the adapters together and follows the
//! remaining time of one voucher session from the terminal.
//!
//! ## Responsibilities
//! - Parse configuration (CLI argument, env vars, config file)
//! - Install the `tracing` subscriber (logs go to stderr)
//! - Construct the HTTP and terminal adapters
//! - Construct the notification center and the status poller, injecting
//!   adapters via port traits
//! - Run one connectivity check, then poll until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use portal_adapter_http_reqwest::{HttpConnectivityProbe, HttpStatusClient};
use portal_adapter_terminal::TerminalSurface;
use portal_app::notification_center::NotificationCenter;
use portal_app::services::connectivity_check::ConnectivityCheck;
use portal_app::services::portal_page::PortalPage;
use portal_app::status_poller::StatusPoller;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(std::env::args().nth(1))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let code = config.session_code()?;
    let kind = config.session_kind();
    tracing::info!(
        base_url = %config.server.base_url,
        %code,
        exempt = kind.is_exempt(),
        "configuration loaded"
    );

    // Adapters
    let surface = Arc::new(TerminalSurface::stdout());
    let status_client = HttpStatusClient::new(&config.server)?;
    let probe = HttpConnectivityProbe::new(&config.server)?;

    // Services
    let notifications = NotificationCenter::new(Arc::clone(&surface), config.notifications);
    let page = PortalPage::new(notifications.clone());
    let check = ConnectivityCheck::new(probe, notifications.clone());
    let poller = StatusPoller::new(status_client, surface, notifications, config.poller);

    page.on_load();
    if let Err(err) = check.run().await {
        tracing::warn!(%err, "portal server unreachable, polling anyway");
    }

    let mut handle = poller.start(code, kind.is_exempt());

    tokio::signal::ctrl_c().await?;
    tracing::info!(state = ?handle.state(), "shutting down");
    handle.stop();

    Ok(())
}
