//! Infrastructure layer for movie-sentiment
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ENV_PREFIX, FileConfig, FileOutputConfig, FileReplConfig,
    FileServiceConfig, FileSessionConfig,
};
pub use http::{
    error::{HttpError, Result},
    service::HttpSentimentService,
    settings::ServiceSettings,
};
