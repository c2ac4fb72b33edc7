//! REPL (Read-Eval-Print Loop) for interactive review analysis

use super::command::ReplCommand;
use crate::cli::prompt::{PasswordSource, read_password};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use sentiment_application::{
    ClientError, NoProgress, ProgressNotifier, SentimentService, SessionClient,
};
use sentiment_domain::Credentials;
use tracing::debug;

/// Interactive review REPL
///
/// Owns the session for its whole lifetime; nothing is written to disk, so
/// the token and input history vanish when the loop ends.
pub struct ReviewRepl<S: SentimentService + 'static> {
    client: SessionClient<S>,
    formatter: ConsoleFormatter,
    show_progress: bool,
}

impl<S: SentimentService + 'static> ReviewRepl<S> {
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

    pub fn client(&self) -> &SessionClient<S> {
        &self.client
    }

    /// Run the interactive REPL
    ///
    /// With `initial_username` set, a login is attempted before the first
    /// prompt.
    pub async fn run(&mut self, initial_username: Option<String>) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        if let Some(username) = initial_username {
            self.login(&mut rl, Some(username)).await;
        }

        loop {
            let readline = rl.readline(self.prompt());

            match readline {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    match ReplCommand::parse(&line) {
                        ReplCommand::Quit => {
                            println!("Bye!");
                            break;
                        }
                        ReplCommand::Login(username) => self.login(&mut rl, username).await,
                        ReplCommand::Review(review) => {
                            let _ = rl.add_history_entry(review.as_str());
                            self.process_review(&review).await;
                        }
                        other => self.handle_command(other).await,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.client.logout();
        Ok(())
    }

    fn prompt(&self) -> &'static str {
        if self.client.session().is_authenticated() {
            "review> "
        } else {
            "guest> "
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Movie Sentiment - Interactive Mode    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /login [user]     - Log in to the service");
        println!("  /whoami           - Show the logged-in user");
        println!("  /logout           - Forget the current token");
        println!("  /status           - Show session state");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
        println!("Any other line is analyzed as a movie review.");
        println!();
    }

    async fn handle_command(&mut self, command: ReplCommand) {
        match command {
            ReplCommand::WhoAmI => self.show_user().await,
            ReplCommand::Logout => {
                self.client.logout();
                println!("{}", ConsoleFormatter::format_success("Logged out"));
            }
            ReplCommand::Status => {
                let session = self.client.session();
                match session.username() {
                    Some(name) if session.is_authenticated() => {
                        println!("Session: {} as {}", session.state(), name.bold());
                    }
                    _ => println!("Session: {}", session.state()),
                }
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
            ReplCommand::Login(_) | ReplCommand::Quit | ReplCommand::Review(_) => {}
        }
    }

    /// Prompt for credentials, log in, then show who we are
    async fn login(&mut self, rl: &mut DefaultEditor, username: Option<String>) {
        let username = match username {
            Some(name) => name,
            None => match rl.readline("Username: ") {
                Ok(name) => name,
                Err(err) => {
                    debug!("Username prompt aborted: {:?}", err);
                    return;
                }
            },
        };

        let password = match read_password(PasswordSource::EnvOrPrompt) {
            Ok(password) => password,
            Err(err) => {
                eprintln!("{} Unable to read password: {}", "x".red().bold(), err);
                return;
            }
        };

        let credentials = Credentials::new(username, password);
        let progress = self.progress();
        if let Err(e) = self
            .client
            .login_with_progress(&credentials, progress.as_ref())
            .await
        {
            self.print_error(&e);
            return;
        }

        self.show_user().await;
    }

    async fn show_user(&mut self) {
        let progress = self.progress();
        match self
            .client
            .fetch_user_info_with_progress(progress.as_ref())
            .await
        {
            Ok(user) => println!("{}", self.formatter.format_user(&user)),
            Err(e) => self.print_error(&e),
        }
    }

    /// Analyze one review and print the outcome inline
    pub async fn process_review(&mut self, review: &str) {
        let progress = self.progress();
        match self
            .client
            .analyze_with_progress(review, progress.as_ref())
            .await
        {
            Ok(result) => println!("{}", self.formatter.format_prediction(&result)),
            Err(e) => self.print_error(&e),
        }
    }

    fn print_error(&self, error: &ClientError) {
        eprintln!("{}", ConsoleFormatter::format_error(error));
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sentiment_application::ServiceError;
    use sentiment_domain::{AccessToken, PredictionResult, ReviewText, UserInfo};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingService {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SentimentService for RecordingService {
        async fn exchange_token(
            &self,
            credentials: &Credentials,
        ) -> Result<AccessToken, ServiceError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("token:{}", credentials.username()));
            Ok(AccessToken::new("tok"))
        }

        async fn fetch_user_info(&self, _token: &AccessToken) -> Result<UserInfo, ServiceError> {
            self.calls.lock().unwrap().push("me".to_string());
            Ok(UserInfo::new("alice"))
        }

        async fn predict(
            &self,
            _token: &AccessToken,
            review: &ReviewText,
        ) -> Result<PredictionResult, ServiceError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("predict:{}", review.content()));
            Ok(PredictionResult::new("Positive", 0.9))
        }
    }

    fn repl(service: Arc<RecordingService>) -> ReviewRepl<RecordingService> {
        ReviewRepl::new(SessionClient::new(service), ConsoleFormatter::default())
            .with_progress(false)
    }

    #[tokio::test]
    async fn test_review_before_login_sends_nothing() {
        let service = Arc::new(RecordingService::default());
        let mut repl = repl(service.clone());

        repl.process_review("Loved every minute").await;

        assert!(service.calls.lock().unwrap().is_empty());
        assert!(!repl.client().session().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_command_clears_session() {
        let service = Arc::new(RecordingService::default());
        let mut repl = repl(service.clone());
        repl.client
            .login(&Credentials::new("alice", "secret"))
            .await
            .unwrap();
        assert_eq!(repl.prompt(), "review> ");

        repl.handle_command(ReplCommand::Logout).await;

        assert_eq!(repl.prompt(), "guest> ");
        repl.process_review("Another one").await;
        assert_eq!(*service.calls.lock().unwrap(), vec!["token:alice"]);
    }

    #[tokio::test]
    async fn test_review_after_login_is_predicted() {
        let service = Arc::new(RecordingService::default());
        let mut repl = repl(service.clone());
        repl.client
            .login(&Credentials::new("alice", "secret"))
            .await
            .unwrap();

        repl.show_user().await;
        repl.process_review("Great cast").await;

        assert_eq!(
            *service.calls.lock().unwrap(),
            vec!["token:alice", "me", "predict:Great cast"]
        );
        assert_eq!(repl.client().session().username(), Some("alice"));
    }
}
