//! HTTP adapter error types.

/// Errors raised while building the HTTP adapter.
///
/// Request-time failures are reported through the domain's
/// `StatusQueryError` / `ConnectivityError` instead.
#[derive(Debug, thiserror::Error)]
pub enum HttpAdapterError {
    /// The configured base URL does not parse.
    #[error("invalid base URL {url:?}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The base URL is not `http` or `https`.
    #[error("unsupported URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    /// The reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[from] reqwest::Error),
}
