//! Review text value object

use crate::core::error::DomainError;

/// A movie review to be classified (Value Object)
///
/// Always non-empty. Whitespace is content: `"   "` is forwarded to the
/// service as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewText {
    content: String,
}

impl ReviewText {
    /// Validate and wrap review text
    pub fn parse(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::EmptyReview);
        }
        Ok(Self { content })
    }

    /// Get the review content, exactly as entered
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for ReviewText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
