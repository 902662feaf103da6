//! Filesystem-safe directory names from media titles.

/// Sanitizes a media title for use as a directory name.
///
/// Replaces characters that are invalid on common filesystems
/// (`/ \ : * ? " < > |` and control characters) with `_`. An empty or
/// whitespace-only title becomes `_` so the directory can still be created.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    let sanitized: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.is_empty() {
        return "_".to_string();
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_title_unchanged() {
        assert_eq!(sanitize_title("Opera Omnia 1650"), "Opera Omnia 1650");
    }

    #[test]
    fn test_sanitize_replaces_invalid_characters() {
        assert_eq!(
            sanitize_title(r#"De Goddelycke Voorsienigheyt: deel 1/2"#),
            "De Goddelycke Voorsienigheyt_ deel 1_2"
        );
    }

    #[test]
    fn test_sanitize_replaces_all_reserved_characters() {
        let sanitized = sanitize_title(r#"a/b\c:d*e?f"g<h>i|j"#);
        for forbidden in ['/', '\\', ':', '*', '?', '"', '<', '>', '|'] {
            assert!(
                !sanitized.contains(forbidden),
                "{forbidden:?} left in {sanitized:?}"
            );
        }
    }

    #[test]
    fn test_sanitize_replaces_control_characters() {
        assert_eq!(sanitize_title("a\tb\nc"), "a_b_c");
    }

    #[test]
    fn test_sanitize_empty_title_becomes_underscore() {
        assert_eq!(sanitize_title(""), "_");
        assert_eq!(sanitize_title("   "), "_");
    }
}
