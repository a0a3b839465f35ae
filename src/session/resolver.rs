//! Session resolver: bootstrap, status check, login, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts build one resolver around their transport, durable store, shared
//! session cell and page environment, run [`SessionResolver::bootstrap`] once
//! per load, and route login/logout/expiry through it. It is the only writer
//! of the [`Session`].
//!
//! ERROR HANDLING
//! ==============
//! Actions never return errors. Status-check failures fall back to
//! unauthenticated silently (first-time visitors are expected to fail it);
//! login and logout failures land in [`Session::error`].

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use super::browser::Browser;
use super::carrier::{SESSION_QUERY_PARAM, SessionCarrier, resolve_carrier};
use super::{LoadingGuard, Session, SessionCell, SessionPhase};
use crate::api::{ApiError, AuthBackend};
use crate::storage::SessionStore;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
pub const BACKEND_UNREACHABLE_MESSAGE: &str =
    "Unable to connect to authentication server. Please check that the backend is running.";

pub struct SessionResolver<B, S, C, W> {
    backend: B,
    store: S,
    cell: C,
    browser: W,
}

impl<B, S, C, W> SessionResolver<B, S, C, W>
where
    B: AuthBackend,
    S: SessionStore,
    C: SessionCell,
    W: Browser,
{
    pub fn new(backend: B, store: S, cell: C, browser: W) -> Self {
        Self { backend, store, cell, browser }
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.cell.snapshot()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Id to present to the backend: the in-memory one, else the persisted one.
    #[must_use]
    pub fn current_session_id(&self) -> Option<String> {
        self.cell.snapshot().session_id.or_else(|| self.store.load())
    }

    /// One-time-per-load carrier selection followed by a status check.
    ///
    /// A `session` URL parameter is always stripped from the address; it is
    /// adopted and persisted only when well-formed.
    pub async fn bootstrap(&self) -> SessionCarrier {
        let url_param = self.browser.query_param(SESSION_QUERY_PARAM);
        let stored = self.store.load();
        let carrier = resolve_carrier(url_param.as_deref(), stored.as_deref());

        if url_param.is_some() {
            self.browser.strip_query_param(SESSION_QUERY_PARAM);
        }
        if let SessionCarrier::UrlParam(id) = &carrier {
            self.store.save(id);
        }
        log::debug!("session bootstrap via {carrier:?}");

        self.check_status(carrier.session_id()).await;
        carrier
    }

    /// Validate a candidate session against the backend and publish the
    /// normalized result.
    pub async fn check_status(&self, session_id: Option<&str>) -> SessionPhase {
        let loading = LoadingGuard::begin(&self.cell);

        match self.backend.auth_status(session_id).await {
            Ok(status) => match status.user() {
                Some(user) => {
                    if let Some(id) = session_id {
                        self.store.save(id);
                    }
                    let session_id = session_id.map(str::to_owned);
                    self.cell.update(|s| s.sign_in(user, session_id));
                }
                None => {
                    if session_id.is_some() {
                        self.store.clear();
                    }
                    self.cell.update(Session::sign_out);
                }
            },
            Err(err) => {
                log::warn!("auth status check failed (expected for new visitors): {err}");
                self.cell.update(Session::sign_out);
            }
        }

        drop(loading);
        self.cell.snapshot().phase()
    }

    /// Ask the backend for the OAuth authorization URL and leave for it.
    pub async fn login(&self) {
        self.clear_error();
        let loading = LoadingGuard::begin(&self.cell);

        match self.backend.login_url().await {
            Ok(url) => {
                log::info!("redirecting to OAuth provider");
                self.browser.navigate(&url);
            }
            Err(err) => {
                log::error!("login failed: {err}");
                let message = login_error_message(&err);
                self.cell.update(|s| s.error = Some(message));
            }
        }

        drop(loading);
    }

    /// Invalidate the session server-side and reset local state.
    ///
    /// The local reset happens whether or not the backend call succeeded, so
    /// the client never stays signed in after asking to leave.
    pub async fn logout(&self) {
        self.clear_error();
        let session_id = self.current_session_id();
        let loading = LoadingGuard::begin(&self.cell);

        let result = self.backend.logout(session_id.as_deref()).await;
        self.store.clear();
        self.cell.update(|s| {
            s.reset();
            if let Err(err) = &result {
                s.error = Some(format!("Failed to logout: {err}"));
            }
        });
        if let Err(err) = &result {
            log::error!("logout failed: {err}");
        }

        drop(loading);
        self.browser.reload();
    }

    /// A protected call came back 401: tell the user, then sign out.
    pub async fn expire_session(&self) {
        log::warn!("session expired mid-use");
        self.browser.alert(SESSION_EXPIRED_MESSAGE);
        self.logout().await;
    }

    pub fn clear_error(&self) {
        self.cell.update(|s| s.error = None);
    }
}

/// User-visible login failure, separating unreachable backend from rejection.
#[must_use]
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) => BACKEND_UNREACHABLE_MESSAGE.to_owned(),
        ApiError::Http { status, body } => {
            format!("Failed to initiate login: server responded {status} {}", body.trim())
                .trim_end()
                .to_owned()
        }
        ApiError::MissingField(_) => {
            "Failed to initiate login: No authorization URL received from server".to_owned()
        }
        other => format!("Failed to initiate login: {other}"),
    }
}
