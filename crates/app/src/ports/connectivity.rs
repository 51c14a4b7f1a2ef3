//! Connectivity probe port: round-trip to the portal's test endpoint.

use std::future::Future;

use portal_domain::connectivity::ConnectivityReport;
use portal_domain::error::ConnectivityError;

/// Checks that the portal server is reachable and answering.
pub trait ConnectivityProbe {
    fn probe(&self) -> impl Future<Output = Result<ConnectivityReport, ConnectivityError>> + Send;
}
