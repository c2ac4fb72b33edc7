//! Presentation layer for movie-sentiment
//!
//! This crate contains the CLI definition, credential prompts, output
//! formatters, the progress spinner, and the single-review and interactive modes.

pub mod cli;
pub mod config;
pub mod one_shot;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use cli::prompt::{PASSWORD_ENV, PasswordSource, prompt_username, read_password};
pub use config::{OutputConfig, ReplConfig};
pub use one_shot::{OneShotError, OneShotRun};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::ProgressReporter;
pub use repl::{ReplCommand, ReviewRepl};
