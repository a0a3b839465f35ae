//! # coldmail
//!
//! Host-agnostic core for the cold email automation front-ends.
//!
//! The browser client (`client/`) and the command-line client (`cli/`) both
//! drive the same [`session::SessionResolver`]: it reconciles the three
//! session carriers (URL parameter, persisted token, cookie), talks to the
//! backend through the [`api::AuthBackend`] seam, and publishes one canonical
//! [`session::Session`] for every reader.
//!
//! `process` owns the draft-generation submission: form validation, the
//! multipart field layout, and classification of the backend's reply
//! (including the 401 "session expired" path).

pub mod api;
pub mod config;
pub mod process;
pub mod session;
pub mod storage;
