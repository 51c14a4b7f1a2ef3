//! reqwest-backed implementations of the status and connectivity ports.

use reqwest::header::{CACHE_CONTROL, HeaderValue};
use url::Url;

use portal_app::ports::{ConnectivityProbe, StatusQuery};
use portal_domain::connectivity::{ConnectivityReport, ConnectivityRequest};
use portal_domain::error::{ConnectivityError, StatusQueryError};
use portal_domain::session::SessionCode;
use portal_domain::status::StatusSnapshot;
use portal_domain::time::now;

use crate::config::HttpConfig;
use crate::error::HttpAdapterError;

/// Error bodies are cut to this many characters before being shown to the visitor.
const BODY_EXCERPT_CHARS: usize = 100;

fn parse_base_url(raw: &str) -> Result<Url, HttpAdapterError> {
    let mut url = Url::parse(raw).map_err(|source| HttpAdapterError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(HttpAdapterError::UnsupportedScheme(url.scheme().to_string()));
    }
    // `Url::join` replaces the last segment unless the path ends with a slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn build_client(config: &HttpConfig) -> Result<reqwest::Client, HttpAdapterError> {
    Ok(reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()?)
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

/// [`StatusQuery`] over `GET /api/status/{code}`.
#[derive(Debug, Clone)]
pub struct HttpStatusClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpStatusClient {
    /// Build a client for the configured portal server.
    ///
    /// # Errors
    ///
    /// Returns [`HttpAdapterError`] when the base URL is invalid or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpAdapterError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: parse_base_url(&config.base_url)?,
        })
    }

    fn status_url(&self, code: &SessionCode) -> Result<Url, StatusQueryError> {
        self.base_url
            .join(&format!("api/status/{code}"))
            .map_err(|err| StatusQueryError::Network(Box::new(err)))
    }
}

impl StatusQuery for HttpStatusClient {
    async fn query(&self, code: &SessionCode) -> Result<StatusSnapshot, StatusQueryError> {
        let url = self.status_url(code)?;
        tracing::trace!(%url, "querying session status");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| StatusQueryError::Network(Box::new(err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusQueryError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| StatusQueryError::Network(Box::new(err)))?;
        StatusSnapshot::from_json(&body)
    }
}

/// [`ConnectivityProbe`] over `POST /test`.
#[derive(Debug, Clone)]
pub struct HttpConnectivityProbe {
    client: reqwest::Client,
    test_url: Url,
}

impl HttpConnectivityProbe {
    /// Build a probe for the configured portal server.
    ///
    /// # Errors
    ///
    /// Returns [`HttpAdapterError`] when the base URL is invalid or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpAdapterError> {
        let base_url = parse_base_url(&config.base_url)?;
        let test_url = base_url
            .join("test")
            .map_err(|source| HttpAdapterError::InvalidBaseUrl {
                url: config.base_url.clone(),
                source,
            })?;
        Ok(Self {
            client: build_client(config)?,
            test_url,
        })
    }
}

impl ConnectivityProbe for HttpConnectivityProbe {
    async fn probe(&self) -> Result<ConnectivityReport, ConnectivityError> {
        tracing::debug!(url = %self.test_url, "sending connectivity test");

        let response = self
            .client
            .post(self.test_url.clone())
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .json(&ConnectivityRequest::hello(now()))
            .send()
            .await
            .map_err(|err| ConnectivityError::Network(Box::new(err)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ConnectivityError::Network(Box::new(err)))?;
        tracing::debug!(
            status = status.as_u16(),
            body = %excerpt(&text),
            "connectivity test answered"
        );

        if !status.is_success() {
            return Err(ConnectivityError::Http {
                status: status.as_u16(),
                body: excerpt(&text),
            });
        }

        serde_json::from_str(&text).map_err(|_| ConnectivityError::NotJson {
            body: excerpt(&text),
        })
    }
}
