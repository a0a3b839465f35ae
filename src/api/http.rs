//! reqwest implementation of the backend contract for native hosts.
//!
//! DESIGN
//! ======
//! Native hosts have no cookie jar shared with a browser, so every call
//! carries the session id as the `session` query parameter when one is
//! known. Status codes are checked before decoding so a non-2xx reply
//! surfaces as [`ApiError::Http`] with the raw body, not a decode error.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use reqwest::multipart::{Form, Part};

use super::types::{AuthStatus, LoginResponse, ProcessResult};
use super::{ApiError, AuthBackend};
use crate::config::ApiConfig;
use crate::process::{LocalFile, ProcessForm, Upload, parse_process_response};

const USER_AGENT: &str = concat!("coldmail/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpBackend {
    /// Build a client with `timeout` applied to every request. Processing
    /// runs can take minutes, so callers pick the budget.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the TLS backend cannot initialize.
    pub fn new(config: ApiConfig, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(map_reqwest)?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /api/email/health`, returning the body text.
    ///
    /// # Errors
    ///
    /// Transport failures or a non-2xx status.
    pub async fn health(&self) -> Result<String, ApiError> {
        let response = self
            .client
            .get(self.config.health_url())
            .send()
            .await
            .map_err(map_reqwest)?;
        let response = expect_success(response).await?;
        response.text().await.map_err(map_reqwest)
    }

    /// Submit a processing job. Attachments are read from disk here, not
    /// when the form is filled.
    ///
    /// # Errors
    ///
    /// [`ApiError::Attachment`] when a selected file cannot be read, otherwise
    /// whatever [`parse_process_response`] reports.
    pub async fn process(
        &self,
        session_id: Option<&str>,
        form: &ProcessForm<LocalFile>,
    ) -> Result<ProcessResult, ApiError> {
        let body = multipart_form(form)?;
        log::info!("submitting processing job: {}", form.summary());

        let response = self
            .client
            .post(self.config.process_url(session_id))
            .multipart(body)
            .send()
            .await
            .map_err(map_reqwest)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        let text = response.text().await.map_err(map_reqwest)?;
        log::debug!("process response: status={status} bytes={}", text.len());

        parse_process_response(status, content_type.as_deref(), &text)
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for HttpBackend {
    async fn auth_status(&self, session_id: Option<&str>) -> Result<AuthStatus, ApiError> {
        let response = self
            .client
            .get(self.config.auth_status_url(session_id))
            .send()
            .await
            .map_err(map_reqwest)?;
        let response = expect_success(response).await?;
        response.json::<AuthStatus>().await.map_err(map_reqwest)
    }

    async fn login_url(&self) -> Result<String, ApiError> {
        let response = self
            .client
            .get(self.config.login_url())
            .send()
            .await
            .map_err(map_reqwest)?;
        let response = expect_success(response).await?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(map_reqwest)?
            .into_auth_url()
    }

    async fn logout(&self, session_id: Option<&str>) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.config.logout_url(session_id))
            .send()
            .await
            .map_err(map_reqwest)?;
        expect_success(response).await?;
        Ok(())
    }
}

/// Lay out the multipart body, reading every attachment into memory.
pub(crate) fn multipart_form(form: &ProcessForm<LocalFile>) -> Result<Form, ApiError> {
    let mut body = Form::new();
    for (name, value) in form.text_fields() {
        body = body.text(name, value);
    }
    for (name, file) in form.file_parts() {
        let bytes = std::fs::read(file.path()).map_err(|e| ApiError::Attachment {
            path: file.path().display().to_string(),
            reason: e.to_string(),
        })?;
        let part = Part::bytes(bytes)
            .file_name(file.file_name())
            .mime_str(&file.mime_type())
            .map_err(|e| ApiError::Attachment {
                path: file.path().display().to_string(),
                reason: e.to_string(),
            })?;
        body = body.part(name, part);
    }
    Ok(body)
}

async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http { status: status.as_u16(), body })
}

fn map_reqwest(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}
