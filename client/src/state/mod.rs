//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only cross-page state is the auth session; everything else is owned
//! by the page that renders it.

pub mod auth;
