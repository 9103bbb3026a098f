//! Backend test support utilities
//!
//! Shared helpers for the backend's integration tests: one-time logging
//! initialization, plain-text error response assertions and unique id
//! generation for fixtures.

pub mod logging;
pub mod plain_text;
pub mod unique_helpers;
