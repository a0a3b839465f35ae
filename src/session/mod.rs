//! Canonical authentication state and the resolver that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every front-end holds exactly one [`Session`] behind a [`SessionCell`].
//! The [`SessionResolver`] is its only writer; pages and components read it
//! to decide between the login screen, a loading indicator and the
//! authenticated workspace.
//!
//! DESIGN
//! ======
//! `is_authenticated` is derived from `user`, so "authenticated without a
//! user" cannot be represented. `loading` is only toggled by
//! [`LoadingGuard`], which clears it on drop.


pub mod browser;
pub mod carrier;
pub mod resolver;

use std::cell::RefCell;
use std::rc::Rc;

pub use browser::Browser;
pub use carrier::{SESSION_QUERY_PARAM, SessionCarrier, normalize_session_id, resolve_carrier};
pub use resolver::SessionResolver;

/// Identity of the signed-in Google account.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    pub user_id: String,
}

/// Client-side authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Explicit session id, absent when relying on cookies alone.
    pub session_id: Option<String>,
    pub user: Option<SessionUser>,
    /// A status/login/logout call is outstanding.
    pub loading: bool,
    /// User-visible failure of the last login/logout attempt.
    pub error: Option<String>,
}

/// Starts out loading: nothing is decided until bootstrap resolution runs.
impl Default for Session {
    fn default() -> Self {
        Self { session_id: None, user: None, loading: true, error: None }
    }
}

/// Coarse state derived from a [`Session`]. The error overlay is read from
/// [`Session::error`] separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Unauthenticated,
    Authenticated(SessionUser),
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            return SessionPhase::Loading;
        }
        match &self.user {
            Some(user) => SessionPhase::Authenticated(user.clone()),
            None => SessionPhase::Unauthenticated,
        }
    }

    pub fn sign_in(&mut self, user: SessionUser, session_id: Option<String>) {
        self.user = Some(user);
        self.session_id = session_id;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.session_id = None;
    }

    /// Drop every piece of in-memory auth state except the in-flight flag.
    pub fn reset(&mut self) {
        *self = Self { loading: self.loading, ..Self::signed_out() };
    }

    /// Resolved, unauthenticated, no error.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { loading: false, ..Self::default() }
    }
}

/// Shared holder of the one [`Session`] a front-end renders from.
pub trait SessionCell {
    fn snapshot(&self) -> Session;
    fn update<F: FnOnce(&mut Session)>(&self, f: F);
}

/// Single-threaded [`SessionCell`] for native hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct LocalSession(Rc<RefCell<Session>>);

impl LocalSession {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self(Rc::new(RefCell::new(session)))
    }
}

impl SessionCell for LocalSession {
    fn snapshot(&self) -> Session {
        self.0.borrow().clone()
    }

    fn update<F: FnOnce(&mut Session)>(&self, f: F) {
        f(&mut self.0.borrow_mut());
    }
}

/// Holds `loading = true` for its lifetime.
///
/// Dropping the guard (normal return, early `?`, panic unwind, or the owning
/// future being dropped) always clears the flag.
pub struct LoadingGuard<'a, C: SessionCell> {
    cell: &'a C,
}

impl<'a, C: SessionCell> LoadingGuard<'a, C> {
    pub fn begin(cell: &'a C) -> Self {
        cell.update(|s| s.loading = true);
        Self { cell }
    }
}

impl<C: SessionCell> Drop for LoadingGuard<'_, C> {
    fn drop(&mut self) {
        self.cell.update(|s| s.loading = false);
    }
}
