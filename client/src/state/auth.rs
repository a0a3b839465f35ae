//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<Session>` through context. Pages build a
//! short-lived [`BrowserResolver`] around that signal whenever they need to
//! run an auth action; the resolver itself holds no state of its own.
//! A separate [`Bootstrapped`] flag marks the end of the page-load check,
//! since `Session::loading` is also raised by login and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use coldmail::config::{API_BASE_URL_ENV, ApiConfig};
use coldmail::session::{Session, SessionCell, SessionResolver};
use leptos::prelude::*;

use crate::net::api::GlooBackend;
use crate::util::browser::{LocalStorageStore, WindowBrowser};

/// Resolver wired to the real window, `localStorage` and gloo-net.
pub type BrowserResolver = SessionResolver<GlooBackend, LocalStorageStore, SignalSession, WindowBrowser>;

/// [`SessionCell`] over the context signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalSession(pub RwSignal<Session>);

impl SessionCell for SignalSession {
    fn snapshot(&self) -> Session {
        self.0.get_untracked()
    }

    fn update<F: FnOnce(&mut Session)>(&self, f: F) {
        self.0.update(f);
    }
}

/// Backend location baked in at build time, falling back to the local
/// development server.
pub fn api_config() -> ApiConfig {
    let Some(raw) = option_env!("COLDMAIL_API_BASE_URL") else {
        return ApiConfig::default();
    };
    ApiConfig::new(raw).unwrap_or_else(|e| {
        log::warn!("ignoring {API_BASE_URL_ENV}: {e}");
        ApiConfig::default()
    })
}

pub fn resolver(session: RwSignal<Session>) -> BrowserResolver {
    SessionResolver::new(
        GlooBackend::new(api_config()),
        LocalStorageStore,
        SignalSession(session),
        WindowBrowser,
    )
}

/// Session signal provided by `App`.
///
/// # Panics
///
/// Panics when rendered outside `App`, which is a wiring bug.
pub fn use_session() -> RwSignal<Session> {
    expect_context::<RwSignal<Session>>()
}

/// Set by `App` once the page-load status check has finished. Later
/// `loading` phases (login, logout) do not reset it.
#[derive(Clone, Copy, Debug)]
pub struct Bootstrapped(pub RwSignal<bool>);

/// # Panics
///
/// Panics when rendered outside `App`.
pub fn use_bootstrapped() -> RwSignal<bool> {
    expect_context::<Bootstrapped>().0
}

/// What the root route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkspaceView {
    Loading,
    Login,
    Workspace,
}

/// Loading until bootstrap settles, then login or workspace by user
/// presence. A login in flight keeps the login page mounted so its busy
/// state shows.
pub fn workspace_view(bootstrapped: bool, session: &Session) -> WorkspaceView {
    if session.is_authenticated() {
        WorkspaceView::Workspace
    } else if bootstrapped {
        WorkspaceView::Login
    } else {
        WorkspaceView::Loading
    }
}
