//! Application layer for movie-sentiment
//!
//! This crate contains the session client use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ClientConfig, UnauthorizedPolicy};
pub use ports::{
    progress::{NoProgress, ProgressNotifier, RequestKind},
    sentiment_service::{SentimentService, ServiceError},
};
pub use use_cases::session_client::{ClientError, SessionClient};
