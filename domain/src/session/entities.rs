//! Session domain entities

use crate::auth::token::AccessToken;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authentication state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unauthenticated => write!(f, "not logged in"),
            SessionState::Authenticated => write!(f, "logged in"),
        }
    }
}

/// One interactive session with the sentiment service (Entity)
///
/// Starts without a token. The token is only ever set by a successful login
/// and only ever cleared by logout, a failed login, or the unauthorized
/// policy of the client. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<AccessToken>,
    username: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Display name reported by the user-info lookup, if it succeeded
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Store a freshly issued token. Any previously known username belongs to
    /// the old token and is dropped.
    pub fn authenticate(&mut self, token: AccessToken) {
        self.token = Some(token);
        self.username = None;
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    /// Return to the unauthenticated state
    pub fn clear(&mut self) {
        self.token = None;
        self.username = None;
    }
}
