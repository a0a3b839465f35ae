//! Host page environment the resolver manipulates.

/// The address bar and window of whatever hosts the resolver.
///
/// In the browser this is `window.location`/`history`; the CLI maps it onto
/// its arguments and the terminal.
pub trait Browser {
    /// Value of a query parameter in the current address, if present.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Remove a query parameter from the visible address without navigating
    /// (history entry is replaced).
    fn strip_query_param(&self, name: &str);

    /// Full-page navigation away from the application.
    fn navigate(&self, url: &str);

    /// Reload the application, discarding all in-memory state.
    fn reload(&self);

    /// Blocking notice shown to the user.
    fn alert(&self, message: &str);
}
