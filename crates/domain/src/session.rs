//! Session codes: the key used to look up remaining session time.
//!
//! The status endpoint accepts either a voucher code (`AB12CD34`) or the MAC
//! address bound to an active voucher, so both shapes are valid here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MAX_CODE_LEN: usize = 64;

/// A validated voucher code or MAC address, safe to embed in a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionCode(String);

impl SessionCode {
    /// Validate and wrap a raw code. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the code is empty, too long, or
    /// contains whitespace, `/`, `?` or `#`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(ValidationError::EmptySessionCode);
        }
        if code.chars().count() > MAX_CODE_LEN {
            return Err(ValidationError::SessionCodeTooLong { max: MAX_CODE_LEN });
        }
        if let Some(ch) = code
            .chars()
            .find(|ch| ch.is_whitespace() || matches!(ch, '/' | '?' | '#' | '%'))
        {
            return Err(ValidationError::InvalidSessionCodeChar(ch));
        }
        Ok(Self(code.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SessionCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SessionCode> for String {
    fn from(code: SessionCode) -> Self {
        code.0
    }
}

/// Whether a session is subject to expiry polling.
///
/// Developer/administrative codes never expire and are never polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    #[default]
    Standard,
    Exempt,
}

impl SessionKind {
    #[must_use]
    pub fn from_exempt_flag(exempt: bool) -> Self {
        if exempt { Self::Exempt } else { Self::Standard }
    }

    #[must_use]
    pub fn is_exempt(self) -> bool {
        matches!(self, Self::Exempt)
    }
}
