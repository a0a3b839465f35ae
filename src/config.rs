//! Backend endpoint configuration.
//!
//! The browser client bakes the base URL in at build time; native hosts read
//! it from the environment via [`ApiConfig::from_env`]. Both share the same
//! validation and endpoint formatting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::api::{AUTH_LOGIN_PATH, AUTH_LOGOUT_PATH, AUTH_STATUS_PATH, EMAIL_HEALTH_PATH, EMAIL_PROCESS_PATH};
use crate::session::SESSION_QUERY_PARAM;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const API_BASE_URL_ENV: &str = "COLDMAIL_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Location of the cold email backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Validate and normalize a base URL. Trailing slashes are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is not an
    /// absolute `http`/`https` URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = |reason: String| ConfigError::InvalidBaseUrl { url: base_url.to_owned(), reason };
        let parsed = url::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
        }
        Ok(Self { base_url: trimmed.to_owned() })
    }

    /// Build config from `COLDMAIL_API_BASE_URL`, defaulting to
    /// `http://localhost:8080` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set to an invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[must_use]
    pub fn auth_status_url(&self, session_id: Option<&str>) -> String {
        with_session_param(self.endpoint(AUTH_STATUS_PATH), session_id)
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        self.endpoint(AUTH_LOGIN_PATH)
    }

    #[must_use]
    pub fn logout_url(&self, session_id: Option<&str>) -> String {
        with_session_param(self.endpoint(AUTH_LOGOUT_PATH), session_id)
    }

    #[must_use]
    pub fn process_url(&self, session_id: Option<&str>) -> String {
        with_session_param(self.endpoint(EMAIL_PROCESS_PATH), session_id)
    }

    #[must_use]
    pub fn health_url(&self) -> String {
        self.endpoint(EMAIL_HEALTH_PATH)
    }
}

/// Append `?session=<id>` (form-encoded) when a session id is known.
fn with_session_param(url: String, session_id: Option<&str>) -> String {
    match session_id {
        Some(id) => {
            let encoded: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
            format!("{url}?{SESSION_QUERY_PARAM}={encoded}")
        }
        None => url,
    }
}
