//! Normalized backend failure taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No HTTP response was obtained (DNS, refused connection, CORS, timeout).
    #[error("unable to reach backend: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// A 2xx response lacked a required field.
    #[error("response missing expected field `{0}`")]
    MissingField(&'static str),
    /// A 2xx response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// A local file could not be attached to an upload.
    #[error("cannot read attachment {path}: {reason}")]
    Attachment { path: String, reason: String },
}

impl ApiError {
    /// HTTP status for [`ApiError::Http`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the session (HTTP 401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for the processing result's error list.
    ///
    /// HTTP failures carry the server's `message` (or `HTTP <status>`) as
    /// their body already, so the body is shown verbatim.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { body, status } if body.trim().is_empty() => format!("HTTP {status}"),
            Self::Http { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}
