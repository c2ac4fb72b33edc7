//! Access token value object

use std::fmt;

/// Opaque bearer credential issued by the authentication service
///
/// The client never inspects or expires it; a token is trusted until a
/// request made with it fails.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token value, for building the `Authorization` header
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header carrying this token
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let token = AccessToken::new("abc.def.ghi");
        assert_eq!(token.bearer_header(), "Bearer abc.def.ghi");
        assert_eq!(token.as_str(), "abc.def.ghi");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = AccessToken::new("secret-token");
        assert!(!format!("{:?}", token).contains("secret-token"));
    }
}
