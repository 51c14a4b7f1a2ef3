//! # portal-adapter-http-reqwest
//!
//! Talks to the captive-portal server over HTTP.
//!
//! | Port | Request |
//! |------|---------|
//! | [`StatusQuery`](portal_app::ports::StatusQuery) | `GET {base_url}/api/status/{code}` |
//! | [`ConnectivityProbe`](portal_app::ports::ConnectivityProbe) | `POST {base_url}/test` |
//!
//! No retries and no backoff: the status poller's schedule is the retry.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `portal-app` and `portal-domain`.

mod client;
mod config;
mod error;

pub use client::{HttpConnectivityProbe, HttpStatusClient};
pub use config::HttpConfig;
pub use error::HttpAdapterError;
