//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `portal.toml` in the working directory. Every field has a
//! default so the file is optional, except the session code which must come
//! from the file, `PORTAL_CODE` or the first command-line argument.
//! Environment variables take precedence over file values and the
//! command-line argument takes precedence over both.

use serde::Deserialize;

use portal_adapter_http_reqwest::HttpConfig;
use portal_app::config::{NotificationConfig, PollerConfig};
use portal_domain::session::{SessionCode, SessionKind};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Portal server settings.
    pub server: HttpConfig,
    /// Session being followed.
    pub session: SessionConfig,
    /// Polling schedule.
    pub poller: PollerConfig,
    /// Notification timings.
    pub notifications: NotificationConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Which session to follow.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Voucher code or MAC address.
    pub code: String,
    /// Exempt sessions have no time limit and are never polled.
    pub exempt: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "portal_status=info,portal=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `portal.toml` (if present), apply
    /// environment-variable overrides, then the command-line session code.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(cli_code: Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file("portal.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        if let Some(code) = cli_code {
            config.session.code = code;
        }
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("PORTAL_BASE_URL") {
            self.server.base_url = val;
        }
        if let Some(secs) = var("PORTAL_TIMEOUT_SECS").and_then(|val| val.parse().ok()) {
            self.server.request_timeout_secs = secs;
        }
        if let Some(val) = var("PORTAL_CODE") {
            self.session.code = val;
        }
        if let Some(exempt) = var("PORTAL_EXEMPT").and_then(|val| parse_flag(&val)) {
            self.session.exempt = exempt;
        }
        if let Some(ms) = var("PORTAL_INTERVAL_MS").and_then(|val| val.parse().ok()) {
            self.poller.interval_ms = ms;
        }
        if let Some(val) = var("PORTAL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poller.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poller interval must be non-zero".to_string(),
            ));
        }
        let url = url::Url::parse(&self.server.base_url).map_err(|err| {
            ConfigError::Validation(format!("invalid base URL {:?}: {err}", self.server.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "base URL must use http or https, got {:?}",
                url.scheme()
            )));
        }
        self.session_code()?;
        Ok(())
    }

    /// The validated session code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when no usable code was configured.
    pub fn session_code(&self) -> Result<SessionCode, ConfigError> {
        SessionCode::parse(&self.session.code)
            .map_err(|err| ConfigError::Validation(format!("session code: {err}")))
    }

    #[must_use]
    pub fn session_kind(&self) -> SessionKind {
        SessionKind::from_exempt_flag(self.session.exempt)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
