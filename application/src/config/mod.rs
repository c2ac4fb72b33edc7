//! Application-level configuration.
//!
//! This module provides configuration types that control how the session
//! client behaves:
//!
//! - [`ClientConfig`] — session client behavior
//! - [`UnauthorizedPolicy`] — what happens to the token after a 401

pub mod client_config;

pub use client_config::{ClientConfig, UnauthorizedPolicy};
