//! Wire DTOs for the backend's JSON responses.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase schema. Every optional or
//! list-valued field defaults when absent so a partially populated response
//! still decodes; required-field checks happen in the callers that need them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::ApiError;
use crate::session::SessionUser;

/// Payload of `GET /api/auth/status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub email: Option<String>,
    /// Accepted as either a JSON string or a JSON integer.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
}

impl AuthStatus {
    /// The signed-in user, present exactly when `authenticated` is true.
    #[must_use]
    pub fn user(&self) -> Option<SessionUser> {
        if !self.authenticated {
            return None;
        }
        Some(SessionUser {
            email: self.email.clone().unwrap_or_default(),
            user_id: self.user_id.clone().unwrap_or_default(),
        })
    }
}

/// Payload of `GET /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub auth_url: Option<String>,
}

impl LoginResponse {
    /// Extract the authorization URL; blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`] when `authUrl` is absent or blank.
    pub fn into_auth_url(self) -> Result<String, ApiError> {
        self.auth_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ApiError::MissingField("authUrl"))
    }
}

/// A role whose template or resume could not be found, with every contact
/// affected by the gap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MissingAsset {
    pub role: String,
    pub expected_path: String,
    pub suggestion: String,
    pub affected_emails: Vec<String>,
}

/// Outcome summary of `POST /api/email/process`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessResult {
    pub total_processed: u64,
    pub success_count: u64,
    pub error_count: u64,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub missing_templates: Vec<MissingAsset>,
    pub missing_resumes: Vec<MissingAsset>,
    pub help_text: Option<String>,
    /// Raw body kept when a 2xx response was not JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Headline status of a processing run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverallStatus {
    Success,
    Warnings,
    Errors,
}

pub const PROCESS_FAILED_HELP: &str = "Check your form inputs and try again. Ensure all required fields are filled and your Excel file is properly formatted.";

impl ProcessResult {
    /// Synthetic single-error result shown when submission itself failed.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Processing failed. Please try again.".to_owned()
        } else {
            message
        };
        Self {
            error_count: 1,
            errors: vec![message],
            help_text: Some(PROCESS_FAILED_HELP.to_owned()),
            ..Self::default()
        }
    }

    /// Errors dominate warnings; anything else is a success.
    #[must_use]
    pub fn overall(&self) -> OverallStatus {
        if self.error_count > 0 {
            OverallStatus::Errors
        } else if !self.warnings.is_empty() {
            OverallStatus::Warnings
        } else {
            OverallStatus::Success
        }
    }

    #[must_use]
    pub fn overall_message(&self) -> &'static str {
        match self.overall() {
            OverallStatus::Errors => "Processing completed with errors",
            OverallStatus::Warnings => "Processing completed with warnings",
            OverallStatus::Success => "Processing completed successfully",
        }
    }

    /// Sentence announcing created drafts, `None` when nothing succeeded.
    #[must_use]
    pub fn draft_summary(&self) -> Option<String> {
        match self.success_count {
            0 => None,
            1 => Some("1 email draft has been created in your Gmail drafts folder.".to_owned()),
            n => Some(format!("{n} email drafts have been created in your Gmail drafts folder.")),
        }
    }

    /// Generic errors are listed only when no per-role grouping explains them.
    #[must_use]
    pub fn shows_generic_errors(&self) -> bool {
        self.error_count > 0 && self.missing_templates.is_empty() && self.missing_resumes.is_empty()
    }
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        Some(_) => Err(D::Error::custom("expected string or integer id")),
    }
}
