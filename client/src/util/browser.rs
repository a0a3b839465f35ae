//! Window and `localStorage` adapters for the session resolver.
//!
//! TRADE-OFFS
//! ==========
//! Every browser call is best effort: a missing window or a storage
//! exception (private mode, quota) logs and no-ops, since the cookie carrier
//! keeps working without either. Off-wasm builds compile to no-ops so pages
//! and tests link without a browser.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use coldmail::session::Browser;
#[cfg(feature = "csr")]
use coldmail::storage::SESSION_ID_KEY;
use coldmail::storage::SessionStore;

/// Value of `name` in a `location.search` string (`?a=1&b=2`).
pub fn query_param_from_search(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// `search` with every `name` pair removed; empty when nothing remains.
pub fn strip_param_from_search(search: &str, name: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    let kept: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key != name)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if kept.is_empty() {
        return String::new();
    }
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(kept)
        .finish();
    format!("?{encoded}")
}

/// The current browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowBrowser;

impl Browser for WindowBrowser {
    fn query_param(&self, name: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let search = web_sys::window()?.location().search().ok()?;
            query_param_from_search(&search, name)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
            None
        }
    }

    fn strip_query_param(&self, name: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location();
            let (Ok(path), Ok(search), Ok(hash)) = (location.pathname(), location.search(), location.hash()) else {
                return;
            };
            let clean = format!("{path}{}{hash}", strip_param_from_search(&search, name));
            let replaced = window
                .history()
                .and_then(|h| h.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean)));
            if replaced.is_err() {
                log::warn!("could not remove `{name}` from the address bar");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
        }
    }

    fn navigate(&self, url: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    }

    fn reload(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
        }
    }
}

/// `localStorage["session_id"]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(SESSION_ID_KEY).ok().flatten()?;
            coldmail::session::normalize_session_id(&raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, session_id: &str) {
        #[cfg(feature = "csr")]
        {
            let saved = local_storage().map(|s| s.set_item(SESSION_ID_KEY, session_id));
            if !matches!(saved, Some(Ok(()))) {
                log::warn!("could not persist session id to localStorage");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session_id;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(SESSION_ID_KEY);
            }
        }
    }
}
