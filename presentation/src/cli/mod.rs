//! Command-line interface definitions and credential prompts.

pub mod commands;
pub mod prompt;
