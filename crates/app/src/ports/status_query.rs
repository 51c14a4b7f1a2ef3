//! Status query port: one request to the session status endpoint.

use std::future::Future;
use std::sync::Arc;

use portal_domain::error::StatusQueryError;
use portal_domain::session::SessionCode;
use portal_domain::status::StatusSnapshot;

/// Fetches the current [`StatusSnapshot`] for a session code.
///
/// Implementations do not retry; the poller's schedule is the retry.
pub trait StatusQuery {
    fn query(
        &self,
        code: &SessionCode,
    ) -> impl Future<Output = Result<StatusSnapshot, StatusQueryError>> + Send;
}

impl<T: StatusQuery + Send + Sync> StatusQuery for Arc<T> {
    fn query(
        &self,
        code: &SessionCode,
    ) -> impl Future<Output = Result<StatusSnapshot, StatusQueryError>> + Send {
        (**self).query(code)
    }
}
