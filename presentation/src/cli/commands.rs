//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for prediction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Colored result box
    Pretty,
    /// Single uncolored line
    Plain,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for sentiment_domain::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Pretty => sentiment_domain::OutputFormat::Pretty,
            OutputFormatArg::Plain => sentiment_domain::OutputFormat::Plain,
            OutputFormatArg::Json => sentiment_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for movie-sentiment
#[derive(Parser, Debug)]
#[command(name = "movie-sentiment")]
#[command(author, version, about = "Movie review sentiment analysis from the terminal")]
#[command(long_about = r#"
movie-sentiment logs in to a sentiment analysis service, submits a movie
review and shows the predicted sentiment with the model's confidence.

Without a review argument an interactive session is started. Log in with
/login, then type reviews one per line.

The password is taken from MOVIE_SENTIMENT_PASSWORD, from stdin with
--password-stdin, or prompted for.

Settings are resolved from (in priority order):
1. --base-url, --output, --no-color, --quiet  Command-line flags
2. MOVIE_SENTIMENT_<SECTION>__<KEY>           Environment overrides
3. --config <path>                             Explicit config file (must exist)
4. ./sentiment.toml or ./.sentiment.toml       Project-level config
5. ~/.config/movie-sentiment/config.toml       Global config

Example:
  movie-sentiment -u alice "A haunting, beautifully shot film."
  movie-sentiment -u alice -o json "Two hours I will never get back."
  movie-sentiment --base-url http://10.0.0.5:8000 --interactive
"#)]
pub struct Cli {
    /// The review to analyze (omit to start an interactive session)
    pub review: Option<String>,

    /// Start an interactive session even when a review is given
    #[arg(short, long)]
    pub interactive: bool,

    /// Username to log in with (prompted for when omitted)
    #[arg(short, long, value_name = "NAME")]
    pub username: Option<String>,

    /// Read the password from the first line of stdin
    #[arg(long)]
    pub password_stdin: bool,

    /// Base URL of the sentiment service
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether to run the interactive session rather than a single analysis
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.review.is_none()
    }
}
