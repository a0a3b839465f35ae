//! Session carrier precedence.
//!
//! URL parameter (post-OAuth redirect) beats the persisted token, which beats
//! the implicit cookie-only check. The whole decision is one pure function so
//! the order is testable without a browser.

#[cfg(test)]
#[path = "carrier_test.rs"]
mod carrier_test;

/// Query parameter the backend appends when redirecting back from OAuth.
pub const SESSION_QUERY_PARAM: &str = "session";

/// Where the session id for the bootstrap status check came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCarrier {
    UrlParam(String),
    Stored(String),
    /// No explicit id; rely on ambient cookies.
    Cookie,
}

impl SessionCarrier {
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        match self {
            Self::UrlParam(id) | Self::Stored(id) => Some(id),
            Self::Cookie => None,
        }
    }
}

/// Pick the carrier to trust. Malformed candidates are skipped.
#[must_use]
pub fn resolve_carrier(url_param: Option<&str>, stored: Option<&str>) -> SessionCarrier {
    if let Some(id) = url_param.and_then(normalize_session_id) {
        return SessionCarrier::UrlParam(id);
    }
    if let Some(id) = stored.and_then(normalize_session_id) {
        return SessionCarrier::Stored(id);
    }
    SessionCarrier::Cookie
}

/// Trim a candidate id, rejecting blanks, embedded whitespace or control
/// characters, and the `null`/`undefined` strings left by script
/// stringification.
#[must_use]
pub fn normalize_session_id(raw: &str) -> Option<String> {
    let id = raw.trim();
    if id.is_empty() || matches!(id, "null" | "undefined") {
        return None;
    }
    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return None;
    }
    Some(id.to_owned())
}
