//! Auth seam between the session resolver and a concrete HTTP transport.

use super::ApiError;
use super::types::AuthStatus;

/// Backend auth endpoints as seen by the session resolver.
///
/// Futures are not `Send`: the browser transport is single-threaded and the
/// resolver runs on one event loop in every host.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend {
    /// `GET /api/auth/status`, passing `session_id` as the `session` query
    /// parameter when present. Cookies are sent by the transport regardless.
    ///
    /// # Errors
    ///
    /// Transport, non-2xx and decode failures.
    async fn auth_status(&self, session_id: Option<&str>) -> Result<AuthStatus, ApiError>;

    /// `GET /api/auth/login`, returning the provider authorization URL.
    ///
    /// # Errors
    ///
    /// Transport and non-2xx failures, or [`ApiError::MissingField`] when the
    /// response has no `authUrl`.
    async fn login_url(&self) -> Result<String, ApiError>;

    /// `POST /api/auth/logout`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Transport and non-2xx failures.
    async fn logout(&self, session_id: Option<&str>) -> Result<(), ApiError>;
}
