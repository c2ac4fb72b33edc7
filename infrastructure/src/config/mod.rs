//! Configuration file loading for movie-sentiment
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MOVIE_SENTIMENT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./sentiment.toml` or `./.sentiment.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/movie-sentiment/config.toml`
//! 5. Default values
//!
//! CLI flags such as `--base-url` are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileOutputConfig, FileReplConfig, FileServiceConfig, FileSessionConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
