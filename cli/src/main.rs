//! CLI entrypoint for movie-sentiment
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use sentiment_application::SessionClient;
use sentiment_domain::{ConfigIssue, Credentials};
use sentiment_infrastructure::{ConfigLoader, FileConfig, HttpSentimentService};
use sentiment_presentation::{
    Cli, ConsoleFormatter, OneShotRun, OutputConfig, OutputFormatter, PasswordSource,
    ReplConfig, ReviewRepl, prompt_username, read_password,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        for source in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", source);
        }
        return Ok(());
    }

    info!("Starting movie-sentiment");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("{}", e))?
    };

    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
    }

    check_config(&config)?;

    let output_config = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    output_config.apply_color();

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
    };

    // === Dependency Injection ===
    let settings = config.service.to_settings();
    let service = Arc::new(
        HttpSentimentService::new(&settings)
            .with_context(|| format!("Cannot use service at {}", settings.base_url))?,
    );
    info!("Using sentiment service at {}", service.base_url());

    info!("Token policy on HTTP 401: {}", config.session.on_unauthorized);
    let client = SessionClient::new(service).with_config(config.session.to_client_config());

    // Interactive mode
    if cli.is_interactive() {
        let formatter = ConsoleFormatter::new(output_config.format);
        let mut repl = ReviewRepl::new(client, formatter).with_progress(repl_config.show_progress);
        repl.run(cli.username.clone()).await?;
        return Ok(());
    }

    // Single review mode
    let review = cli.review.clone().unwrap_or_default();
    let password_source = if cli.password_stdin {
        PasswordSource::Stdin
    } else {
        PasswordSource::EnvOrPrompt
    };

    let formatter = ConsoleFormatter::new(output_config.format);
    let mut run = OneShotRun::new(client, formatter).with_progress(repl_config.show_progress);
    let result = run
        .run(&review, || {
            let username = match &cli.username {
                Some(name) => name.clone(),
                None => prompt_username()?,
            };
            Ok(Credentials::new(username, read_password(password_source)?))
        })
        .await?;

    println!("{}", run.formatter().format_prediction(&result));
    Ok(())
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr, or to `log_file` without ANSI colors.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Print configuration issues; refuse to start on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues: Vec<ConfigIssue> = config.validate();

    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
        eprintln!("Warning: {}", issue.message);
    }

    let errors: Vec<&ConfigIssue> = issues.iter().filter(|i| i.is_error()).collect();
    if errors.is_empty() {
        return Ok(());
    }

    for issue in &errors {
        eprintln!("Error: {}", issue.message);
    }
    bail!("Invalid configuration ({} error(s))", errors.len())
}
