//! Root application component with routing and the auth context provider.

use coldmail::session::Session;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{auth_callback::AuthCallbackPage, workspace::WorkspacePage};
use crate::state::auth::Bootstrapped;

/// Root application component.
///
/// Provides the shared session signal and runs carrier bootstrap once per
/// page load, before any route reads it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let bootstrapped = RwSignal::new(false);
    provide_context(session);
    provide_context(Bootstrapped(bootstrapped));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::state::auth::resolver(session).bootstrap().await;
        bootstrapped.set(true);
    });

    view! {
        <Title text="Cold Email Automation"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WorkspacePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("success")) view=AuthCallbackPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("error")) view=AuthCallbackPage/>
            </Routes>
        </Router>
    }
}
