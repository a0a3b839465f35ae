//! Landing page for the OAuth redirect (`/auth/success`, `/auth/error`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend redirects here after Google consent, usually with a
//! `session` parameter that `App` has already consumed during bootstrap.
//! This page only reads the outcome of that first status check instead of
//! issuing a second one, then sends the user home.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use std::time::Duration;

use coldmail::session::Session;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::auth::use_session;

/// Pause before leaving for `/` so the outcome stays readable.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackStatus {
    Verifying,
    Success,
    Cancelled,
    Failed,
}

impl CallbackStatus {
    /// An `error` parameter means the user backed out of the consent screen.
    pub fn from_query(error: Option<&str>) -> Option<Self> {
        error.filter(|e| !e.is_empty()).map(|_| Self::Cancelled)
    }

    pub fn resolve(error: Option<&str>, session: &Session) -> Self {
        if let Some(status) = Self::from_query(error) {
            return status;
        }
        if session.loading {
            Self::Verifying
        } else if session.is_authenticated() {
            Self::Success
        } else {
            Self::Failed
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Verifying => "Verifying Authentication...",
            Self::Success => "Authentication Successful!",
            Self::Cancelled => "Authentication Cancelled",
            Self::Failed => "Authentication Failed",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Verifying => "Please wait while we complete the authentication process.",
            Self::Success => "Authentication successful! Redirecting...",
            Self::Cancelled => "Authentication was cancelled",
            Self::Failed => "Failed to verify authentication",
        }
    }

    pub fn redirects_home(self) -> bool {
        matches!(self, Self::Success | Self::Cancelled)
    }
}

fn schedule_home_redirect() {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async {
        use coldmail::session::Browser;

        gloo_timers::future::sleep(REDIRECT_DELAY).await;
        crate::util::browser::WindowBrowser.navigate("/");
    });
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let status = Memo::new(move |_| {
        let error = query.with(|q| q.get("error"));
        session.with(|s| CallbackStatus::resolve(error.as_deref(), s))
    });

    Effect::new(move || {
        if status.get().redirects_home() {
            schedule_home_redirect();
        }
    });

    view! {
        <div class="auth-callback-container">
            <div class="auth-callback-card">
                <h2>{move || status.get().title()}</h2>
                <p>{move || status.get().message()}</p>
                <Show when=move || status.get() == CallbackStatus::Failed>
                    <a class="retry-button" href="/">"Try Again"</a>
                </Show>
            </div>
        </div>
    }
}
