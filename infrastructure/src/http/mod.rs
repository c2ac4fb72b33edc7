//! HTTP adapter
//!
//! Implements SentimentService for the remote REST service.

pub mod error;
pub mod protocol;
pub mod service;
pub mod settings;
