//! Slash-command parsing for the interactive session

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `/login [username]`
    Login(Option<String>),
    /// `/whoami`
    WhoAmI,
    /// `/logout`
    Logout,
    /// `/status`
    Status,
    /// `/help`, `/h`, `/?`
    Help,
    /// `/quit`, `/exit`, `/q`
    Quit,
    /// Any other slash command
    Unknown(String),
    /// A review to analyze
    Review(String),
}

impl ReplCommand {
    /// Parse one line of input. Lines not starting with `/` are reviews and
    /// are passed through untouched.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return ReplCommand::Review(line.to_string());
        };

        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts
            .next()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        match name {
            "login" => ReplCommand::Login(arg),
            "whoami" | "me" => ReplCommand::WhoAmI,
            "logout" => ReplCommand::Logout,
            "status" => ReplCommand::Status,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(trimmed.to_string()),
        }
    }
}
