//! Credential prompts
//!
//! The password is never echoed and never stored beyond the login call.

use std::io::{self, BufRead, Write};

/// Environment variable consulted for the password before prompting
pub const PASSWORD_ENV: &str = "MOVIE_SENTIMENT_PASSWORD";

/// Where the password for a login comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSource {
    /// `MOVIE_SENTIMENT_PASSWORD`, falling back to an interactive prompt
    EnvOrPrompt,
    /// First line of stdin (`--password-stdin`)
    Stdin,
}

/// Ask for a username on the terminal
pub fn prompt_username() -> io::Result<String> {
    print!("Username: ");
    io::stdout().flush()?;
    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    Ok(strip_line_ending(&username).to_string())
}

/// Resolve the password from the given source
pub fn read_password(source: PasswordSource) -> io::Result<String> {
    match source {
        PasswordSource::Stdin => read_first_line(io::stdin().lock()),
        PasswordSource::EnvOrPrompt => match std::env::var(PASSWORD_ENV) {
            Ok(password) => Ok(password),
            Err(_) => rpassword::prompt_password("Password: "),
        },
    }
}

fn read_first_line(mut reader: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(strip_line_ending(&line).to_string())
}

/// Drop a trailing `\n` or `\r\n` and nothing else: credentials are
/// forwarded exactly as typed.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("alice\n"), "alice");
        assert_eq!(strip_line_ending("alice\r\n"), "alice");
        assert_eq!(strip_line_ending(" alice "), " alice ");
        assert_eq!(strip_line_ending("\n"), "");
    }

    #[test]
    fn test_read_first_line() {
        let input = io::Cursor::new("s3cret pass\nignored\n");
        assert_eq!(read_first_line(input).unwrap(), "s3cret pass");
    }

    #[test]
    fn test_read_first_line_empty_input() {
        let input = io::Cursor::new("");
        assert_eq!(read_first_line(input).unwrap(), "");
    }
}
