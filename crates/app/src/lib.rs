//! # portal-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StatusQuery`: fetch one session status snapshot
//!   - `ConnectivityProbe`: round-trip to the portal test endpoint
//!   - `NotificationSurface`: where notifications are drawn
//!   - `CountdownDisplay`: where the session countdown is drawn
//! - Define **driving/inbound** use-cases:
//!   - `NotificationCenter`: show, auto-dismiss, and dismiss notifications
//!   - `StatusPoller`: poll the status endpoint and keep the countdown current
//!   - `PortalPage`, `ConnectivityCheck`: page-level flows built on the above
//! - Orchestrate domain objects without knowing *how* rendering or IO works
//!
//! ## Dependency rule
//! Depends on `portal-domain` only (plus `tokio` for timers and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! Everything that schedules work (`NotificationCenter::show` with a duration,
//! `StatusPoller::start`) must be called from within a tokio runtime.

pub mod config;
pub mod notification_center;
pub mod ports;
pub mod services;
pub mod status_poller;
