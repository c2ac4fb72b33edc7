//! Session client use case
//!
//! Owns the [`Session`] for one interactive session and mediates the three
//! remote calls: token exchange, user-info lookup, prediction. Authenticated
//! calls are gated on token presence so nothing unauthenticated ever leaves
//! the client.

use crate::config::ClientConfig;
use crate::ports::progress::{NoProgress, ProgressNotifier, RequestKind};
use crate::ports::sentiment_service::{SentimentService, ServiceError};
use sentiment_domain::{
    AccessToken, Credentials, DomainError, PredictionResult, ReviewText, Session, UserInfo,
    truncate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced to the user by the session client
///
/// None of them are fatal: the presentation layer prints the message inline
/// and the session continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Token exchange rejected (non-200) or unusable
    #[error("Login failed: {0}")]
    Auth(String),

    /// Transport-level failure talking to one of the endpoints
    #[error("Error connecting to the {}: {message}", .target.service_name())]
    Connectivity { target: RequestKind, message: String },

    /// User-info lookup failed
    #[error("Unable to fetch user information: {0}")]
    Fetch(String),

    /// Prediction request failed
    #[error("An error occurred with the prediction request: {0}")]
    Prediction(String),

    #[error("Please log in to access the sentiment analysis service.")]
    NotAuthenticated,

    #[error("Please enter a review to analyze.")]
    EmptyReview,
}

impl ClientError {
    /// Map a port error for the given call onto the client taxonomy
    fn from_service(target: RequestKind, error: ServiceError) -> Self {
        match (target, error) {
            (_, ServiceError::Connection(message)) => {
                ClientError::Connectivity { target, message }
            }
            (RequestKind::Login, ServiceError::Status { .. }) => {
                ClientError::Auth("Incorrect username or password.".to_string())
            }
            (RequestKind::Login, other) => ClientError::Auth(other.to_string()),
            (RequestKind::UserInfo, other) => ClientError::Fetch(other.to_string()),
            (RequestKind::Predict, other) => ClientError::Prediction(other.to_string()),
        }
    }

    /// Whether the error was raised before any request was sent
    pub fn is_precondition(&self) -> bool {
        matches!(self, ClientError::NotAuthenticated | ClientError::EmptyReview)
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, ClientError::Connectivity { .. })
    }
}

impl From<DomainError> for ClientError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::EmptyReview => ClientError::EmptyReview,
        }
    }
}

/// Use case driving one interactive session against the sentiment service
pub struct SessionClient<S: SentimentService + 'static> {
    service: Arc<S>,
    session: Session,
    config: ClientConfig,
}

impl<S: SentimentService + 'static> SessionClient<S> {
    /// Create a client with a fresh, unauthenticated session
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            session: Session::new(),
            config: ClientConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Log in with default (no-op) progress
    pub async fn login(&mut self, credentials: &Credentials) -> Result<&Session, ClientError> {
        self.login_with_progress(credentials, &NoProgress).await
    }

    /// Exchange credentials for a token and store it on the session
    ///
    /// A failed attempt leaves the session unauthenticated, even if it held a
    /// token from an earlier login.
    pub async fn login_with_progress(
        &mut self,
        credentials: &Credentials,
        progress: &dyn ProgressNotifier,
    ) -> Result<&Session, ClientError> {
        info!("Logging in as '{}'", credentials.username());

        progress.on_request_start(RequestKind::Login);
        let result = self.service.exchange_token(credentials).await;
        progress.on_request_complete(RequestKind::Login, result.is_ok());

        match result {
            Ok(token) => {
                self.session.authenticate(token);
                info!("Login successful");
                Ok(&self.session)
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.session.clear();
                Err(ClientError::from_service(RequestKind::Login, e))
            }
        }
    }

    /// Fetch user info with default (no-op) progress
    pub async fn fetch_user_info(&mut self) -> Result<UserInfo, ClientError> {
        self.fetch_user_info_with_progress(&NoProgress).await
    }

    /// Look up the profile of the logged-in user
    ///
    /// On success the username is remembered on the session for display.
    pub async fn fetch_user_info_with_progress(
        &mut self,
        progress: &dyn ProgressNotifier,
    ) -> Result<UserInfo, ClientError> {
        let token = self.require_token()?;

        progress.on_request_start(RequestKind::UserInfo);
        let result = self.service.fetch_user_info(&token).await;
        progress.on_request_complete(RequestKind::UserInfo, result.is_ok());

        match result {
            Ok(user) => {
                debug!("Fetched user info for '{}'", user.username);
                self.session.set_username(user.username.clone());
                Ok(user)
            }
            Err(e) => {
                warn!("User info lookup failed: {}", e);
                self.apply_unauthorized_policy(&e);
                Err(ClientError::from_service(RequestKind::UserInfo, e))
            }
        }
    }

    /// Analyze a review with default (no-op) progress
    pub async fn analyze(&mut self, review: &str) -> Result<PredictionResult, ClientError> {
        self.analyze_with_progress(review, &NoProgress).await
    }

    /// Classify a review with the remote model
    ///
    /// Rejects an unauthenticated session and an empty review before any
    /// request is built.
    pub async fn analyze_with_progress(
        &mut self,
        review: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<PredictionResult, ClientError> {
        let token = self.require_token()?;
        let review = ReviewText::parse(review)?;

        debug!("Analyzing review: {}", truncate(review.content(), 60));

        progress.on_request_start(RequestKind::Predict);
        let result = self.service.predict(&token, &review).await;
        progress.on_request_complete(RequestKind::Predict, result.is_ok());

        match result {
            Ok(prediction) => {
                info!(
                    "Prediction: {} (confidence {:.2})",
                    prediction.label, prediction.confidence
                );
                Ok(prediction)
            }
            Err(e) => {
                warn!("Prediction failed: {}", e);
                self.apply_unauthorized_policy(&e);
                Err(ClientError::from_service(RequestKind::Predict, e))
            }
        }
    }

    /// Drop the token and return to the unauthenticated state
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            info!("Logging out");
        }
        self.session.clear();
    }

    fn require_token(&self) -> Result<AccessToken, ClientError> {
        self.session
            .token()
            .cloned()
            .ok_or(ClientError::NotAuthenticated)
    }

    fn apply_unauthorized_policy(&mut self, error: &ServiceError) {
        if error.is_unauthorized() && self.config.clears_on_unauthorized() {
            warn!("Token rejected by the service, clearing session");
            self.session.clear();
        }
    }
}
