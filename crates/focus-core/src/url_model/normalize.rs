//! Normalization used for de-duplicating saved links.

/// Parser-serialized form of `url` with one trailing slash removed.
///
/// Unparseable input is trimmed and otherwise handled the same way. No
/// further canonicalization happens: query parameter order and path case are
/// kept as given.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    let serialized = match url::Url::parse(trimmed) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => trimmed.to_string(),
    };
    match serialized.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => serialized,
    }
}

pub fn are_urls_equivalent(a: &str, b: &str) -> bool {
    normalize_url(a) == normalize_url(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_trailing_slash() {
        assert_eq!(normalize_url("https://example.com/"), "https://example.com");
        assert_eq!(normalize_url("https://example.com/a/"), "https://example.com/a");
        assert_eq!(normalize_url("https://example.com/a//"), "https://example.com/a/");
    }

    #[test]
    fn parser_lowercases_scheme_and_host() {
        assert_eq!(normalize_url("HTTPS://Example.COM/Path"), "https://example.com/Path");
    }

    #[test]
    fn unparseable_input_is_trimmed() {
        assert_eq!(normalize_url("  just text/ "), "just text");
    }

    #[test]
    fn equivalence() {
        assert!(are_urls_equivalent("https://example.com", "https://example.com/"));
        assert!(are_urls_equivalent("https://Example.com/a/", "https://example.com/a"));
        assert!(!are_urls_equivalent(
            "https://example.com/?a=1&b=2",
            "https://example.com/?b=2&a=1"
        ));
        assert!(!are_urls_equivalent("http://example.com", "https://example.com"));
    }
}
