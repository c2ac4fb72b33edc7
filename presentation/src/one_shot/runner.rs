//! Runner for the non-interactive command

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use sentiment_application::{
    ClientError, NoProgress, ProgressNotifier, SentimentService, SessionClient,
};
use sentiment_domain::{Credentials, PredictionResult, ReviewText};
use std::io;
use thiserror::Error;
use tracing::debug;

/// Failure of a single-review run
#[derive(Error, Debug)]
pub enum OneShotError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Unable to read credentials: {0}")]
    Credentials(#[from] io::Error),
}

/// Drives one login + analysis against the service
pub struct OneShotRun<S: SentimentService + 'static> {
    client: SessionClient<S>,
    formatter: ConsoleFormatter,
    show_progress: bool,
}

impl<S: SentimentService + 'static> OneShotRun<S> {
    pub fn new(client: SessionClient<S>, formatter: ConsoleFormatter) -> Self {
        Self {
            client,
            formatter,
            show_progress: true,
        }
    }

    /// Set whether to show a spinner while requests are in flight
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn formatter(&self) -> &ConsoleFormatter {
        &self.formatter
    }

    /// Analyze `review`, logging in with the credentials `credentials` yields
    ///
    /// An empty review is rejected before credentials are requested, so
    /// nothing is prompted for and nothing is sent. A failed user-info lookup
    /// is printed and does not stop the analysis.
    pub async fn run<F>(
        &mut self,
        review: &str,
        credentials: F,
    ) -> Result<PredictionResult, OneShotError>
    where
        F: FnOnce() -> io::Result<Credentials>,
    {
        ReviewText::parse(review).map_err(ClientError::from)?;

        let credentials = credentials()?;
        let progress = self.progress();

        self.client
            .login_with_progress(&credentials, progress.as_ref())
            .await?;

        match self
            .client
            .fetch_user_info_with_progress(progress.as_ref())
            .await
        {
            Ok(user) => println!("{}", self.formatter.format_user(&user)),
            Err(e) => {
                debug!("Continuing without user info: {}", e);
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }

        let result = self
            .client
            .analyze_with_progress(review, progress.as_ref())
            .await;

        self.client.logout();
        Ok(result?)
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }
}
