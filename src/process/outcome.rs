//! Classification of the processing endpoint's reply.
//!
//! ERROR HANDLING
//! ==============
//! The body is read as text first so it can always be logged. JSON is only
//! parsed when the content type says so; anything else is kept raw. A 401
//! is singled out because it means the session expired mid-use and the
//! caller must force a logout rather than list a processing error.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use crate::api::ApiError;
use crate::api::types::ProcessResult;

/// Turn a raw processing response into a result or a normalized error.
///
/// # Errors
///
/// [`ApiError::Http`] for non-2xx statuses (body = the server's `message`
/// field, else `HTTP <status>`), [`ApiError::Decode`] when a JSON body does
/// not have the result shape.
pub fn parse_process_response(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<ProcessResult, ApiError> {
    let is_json = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));
    let payload = if is_json {
        serde_json::from_str::<serde_json::Value>(body).ok()
    } else {
        None
    };

    if !(200..300).contains(&status) {
        let message = payload
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| format!("HTTP {status}"), str::to_owned);
        return Err(ApiError::Http { status, body: message });
    }

    match payload {
        Some(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
        None => Ok(ProcessResult { raw: Some(body.to_owned()), ..ProcessResult::default() }),
    }
}

/// What the UI should do after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The backend ran the job; show its result.
    Completed(ProcessResult),
    /// HTTP 401: force logout and ask the user to sign in again.
    SessionExpired,
    /// Submission failed; show the synthetic single-error result.
    Failed(ProcessResult),
}

impl ProcessOutcome {
    #[must_use]
    pub fn from_response(response: Result<ProcessResult, ApiError>) -> Self {
        match response {
            Ok(result) => Self::Completed(result),
            Err(err) if err.is_unauthorized() => Self::SessionExpired,
            Err(err) => {
                log::error!("processing failed: {err}");
                Self::Failed(ProcessResult::failed(err.user_message()))
            }
        }
    }

    /// Result to display, `None` when the session expired.
    #[must_use]
    pub fn result(&self) -> Option<&ProcessResult> {
        match self {
            Self::Completed(result) | Self::Failed(result) => Some(result),
            Self::SessionExpired => None,
        }
    }
}
