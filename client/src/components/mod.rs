//! Reusable UI component modules.

pub mod processing_status;
