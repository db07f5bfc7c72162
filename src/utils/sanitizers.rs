//! String sanitization utilities for issue titles

/// Truncate a string to at most `max_chars` characters
///
/// Counts characters, not bytes, so multi-byte text is never split mid-character.
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &input[..byte_idx],
        None => input,
    }
}

/// Strip a leading UTF-8 byte-order mark
pub fn strip_bom(input: &str) -> &str {
    input.strip_prefix('\u{feff}').unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let title = "é".repeat(250);
        let truncated = truncate_chars(&title, 200);
        assert_eq!(truncated.chars().count(), 200);
        assert_eq!(truncated.len(), 400);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}owner/repo"), "owner/repo");
        assert_eq!(strip_bom("owner/repo"), "owner/repo");
    }
}
