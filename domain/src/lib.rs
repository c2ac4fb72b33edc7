//! Domain layer for movie-sentiment
//!
//! This crate contains the entities and value objects of the sentiment client.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A [`Session`] holds the bearer token issued by the remote service for the
//! lifetime of one interactive session. It is either unauthenticated (no token)
//! or authenticated.
//!
//! ## Review and Prediction
//!
//! - [`ReviewText`]: a validated, non-empty review to classify
//! - [`PredictionResult`]: the label and confidence returned by the service

pub mod auth;
pub mod config;
pub mod core;
pub mod review;
pub mod session;

// Re-export commonly used types
pub use auth::{credentials::Credentials, token::AccessToken, user::UserInfo};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, string::truncate};
pub use review::{
    prediction::{PredictionResult, SentimentLabel},
    review_text::ReviewText,
};
pub use session::entities::{Session, SessionState};
