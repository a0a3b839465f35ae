//! Login page starting the Google OAuth flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::use_session;

fn login_button_label(loading: bool) -> &'static str {
    if loading { "Connecting..." } else { "Sign in with Google" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let loading = move || session.with(|s| s.loading);
    let error = move || session.with(|s| s.error.clone());

    let on_login = move |_ev: leptos::ev::MouseEvent| {
        if session.with_untracked(|s| s.loading) {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::state::auth::resolver(session).login().await;
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Cold Email Automation"</h1>
                <h2>"Gmail Authentication Required"</h2>
                <p class="login-card__subtitle">
                    "To create email drafts in your Gmail account, you need to authenticate with Google."
                </p>
                <Show when=move || error().is_some()>
                    <div class="login-message login-message--error">
                        <strong>"Authentication Error"</strong>
                        <p>{move || error().unwrap_or_default()}</p>
                    </div>
                </Show>
                <button class="login-button" on:click=on_login disabled=loading>
                    {move || login_button_label(loading())}
                </button>
            </div>
        </div>
    }
}
