//! Terminal stand-in for the browser window.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resolver expects an address bar and a page. On the command line the
//! "address" is the `--session` argument, navigation prints the URL for the
//! user to open, and alerts go to stderr. There is nothing to strip or
//! reload, so those are logged no-ops.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use coldmail::session::{Browser, SESSION_QUERY_PARAM};

#[derive(Clone, Debug, Default)]
pub struct TerminalBrowser {
    session_arg: Option<String>,
}

impl TerminalBrowser {
    pub fn new(session_arg: Option<String>) -> Self {
        Self { session_arg }
    }
}

impl Browser for TerminalBrowser {
    fn query_param(&self, name: &str) -> Option<String> {
        if name == SESSION_QUERY_PARAM { self.session_arg.clone() } else { None }
    }

    fn strip_query_param(&self, name: &str) {
        tracing::debug!(param = name, "session argument consumed");
    }

    fn navigate(&self, url: &str) {
        println!("Open this address in your browser to sign in with Google:\n\n  {url}\n");
    }

    fn reload(&self) {
        tracing::debug!("local session state reset");
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}
