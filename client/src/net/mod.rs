//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the gloo-net implementation of the backend contract; wire types
//! live in `coldmail::api::types` and are shared with the CLI.

pub mod api;
