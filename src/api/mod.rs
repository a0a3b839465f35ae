//! HTTP contract with the cold email backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` mirrors the backend's JSON payloads, `error` normalizes the three
//! failure classes (transport, HTTP status, response shape), and `backend`
//! defines the auth seam the session resolver drives. `http` is the reqwest
//! implementation used by native hosts.

pub mod backend;
pub mod error;
#[cfg(feature = "native")]
pub mod http;
pub mod types;

pub use backend::AuthBackend;
pub use error::ApiError;

pub const AUTH_STATUS_PATH: &str = "/api/auth/status";
pub const AUTH_LOGIN_PATH: &str = "/api/auth/login";
pub const AUTH_LOGOUT_PATH: &str = "/api/auth/logout";
pub const EMAIL_PROCESS_PATH: &str = "/api/email/process";
pub const EMAIL_HEALTH_PATH: &str = "/api/email/health";
