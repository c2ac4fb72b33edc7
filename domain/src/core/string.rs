//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_review_untouched() {
        assert_eq!(truncate("Loved it", 20), "Loved it");
    }

    #[test]
    fn test_truncate_long_review() {
        assert_eq!(
            truncate("An absolute masterpiece of pacing", 16),
            "An absolute m..."
        );
    }

    #[test]
    fn test_truncate_multibyte() {
        // "é" is 2 bytes: target=5 lands inside the third "é", back off to 4
        assert_eq!(truncate("éééééé", 8), "éé...");
        assert_eq!(truncate("Très bien", 20), "Très bien");
    }

    #[test]
    fn test_truncate_emoji() {
        // Emojis are 4 bytes each: max_len=10 -> target=7 -> boundary at 4
        assert_eq!(truncate("🎬🎥🍿", 10), "🎬...");
    }
}
