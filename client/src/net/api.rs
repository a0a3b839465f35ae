//! REST calls to the cold email backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the session cookie travels cross-origin.
//! Off-wasm builds return [`ApiError::Transport`] since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses become [`ApiError::Http`] carrying the body text so the
//! resolver can word login failures; fetch rejections become
//! [`ApiError::Transport`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use coldmail::api::types::{AuthStatus, ProcessResult};
use coldmail::api::{ApiError, AuthBackend};
use coldmail::config::ApiConfig;
use coldmail::process::ProcessForm;

use crate::util::files::BrowserFile;

#[cfg(any(test, not(feature = "csr")))]
const UNAVAILABLE: &str = "backend calls are only available in the browser";

/// `Ok` for 2xx, otherwise the status and body as [`ApiError::Http`].
#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16, body: impl FnOnce() -> String) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Http { status, body: body() })
    }
}

#[cfg(feature = "csr")]
fn map_gloo(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

/// Backend client for the browser.
#[derive(Clone, Debug)]
pub struct GlooBackend {
    config: ApiConfig,
}

impl GlooBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[cfg(feature = "csr")]
    async fn get(&self, url: &str) -> Result<gloo_net::http::Response, ApiError> {
        let resp = gloo_net::http::Request::get(url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(map_gloo)?;
        Self::expect_success(resp).await
    }

    #[cfg(feature = "csr")]
    async fn expect_success(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
        let status = resp.status();
        let body = if resp.ok() { String::new() } else { resp.text().await.unwrap_or_default() };
        check_status(status, || body)?;
        Ok(resp)
    }

    /// Submit the processing job as multipart form data via
    /// `POST /api/email/process`.
    ///
    /// # Errors
    ///
    /// Transport failures, [`ApiError::Attachment`] for a selection without
    /// a DOM handle, and whatever `parse_process_response` reports.
    pub async fn submit_process(
        &self,
        session_id: Option<&str>,
        form: &ProcessForm<BrowserFile>,
    ) -> Result<ProcessResult, ApiError> {
        #[cfg(feature = "csr")]
        {
            use coldmail::process::{Upload, parse_process_response};

            let data = web_sys::FormData::new().map_err(|_| ApiError::Transport("FormData unavailable".to_owned()))?;
            for (name, value) in form.text_fields() {
                data.append_with_str(name, &value)
                    .map_err(|_| ApiError::Transport(format!("could not append field {name}")))?;
            }
            for (name, file) in form.file_parts() {
                let attachment_error = |reason: &str| ApiError::Attachment {
                    path: file.file_name(),
                    reason: reason.to_owned(),
                };
                let handle = file.handle().ok_or_else(|| attachment_error("file is no longer selected"))?;
                data.append_with_blob_and_filename(name, handle, &file.file_name())
                    .map_err(|_| attachment_error("browser refused the file"))?;
            }

            log::info!("submitting processing job: {}", form.summary());
            let resp = gloo_net::http::Request::post(&self.config.process_url(session_id))
                .credentials(web_sys::RequestCredentials::Include)
                .body(data)
                .map_err(map_gloo)?
                .send()
                .await
                .map_err(map_gloo)?;

            let status = resp.status();
            let content_type = resp.headers().get("content-type");
            let text = resp.text().await.map_err(map_gloo)?;
            parse_process_response(status, content_type.as_deref(), &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session_id, form);
            Err(ApiError::Transport(UNAVAILABLE.to_owned()))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for GlooBackend {
    /// `GET /api/auth/status[?session=]`.
    async fn auth_status(&self, session_id: Option<&str>) -> Result<AuthStatus, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.get(&self.config.auth_status_url(session_id)).await?;
            resp.json::<AuthStatus>().await.map_err(map_gloo)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session_id;
            Err(ApiError::Transport(UNAVAILABLE.to_owned()))
        }
    }

    /// `GET /api/auth/login` returning `{ authUrl }`.
    async fn login_url(&self) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.get(&self.config.login_url()).await?;
            resp.json::<coldmail::api::types::LoginResponse>()
                .await
                .map_err(map_gloo)?
                .into_auth_url()
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Transport(UNAVAILABLE.to_owned()))
        }
    }

    /// `POST /api/auth/logout[?session=]`.
    async fn logout(&self, session_id: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.logout_url(session_id))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(map_gloo)?;
            Self::expect_success(resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session_id;
            Err(ApiError::Transport(UNAVAILABLE.to_owned()))
        }
    }
}
