//! Shared building blocks for detectors: defensive parsing, host matching,
//! and the match/no-match result type.

use regex::Regex;
use url::Url;

/// Outcome of a single detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    Match { identifier: Option<String> },
}

impl MatchResult {
    pub fn matched() -> Self {
        MatchResult::Match { identifier: None }
    }

    pub fn with_identifier(id: impl Into<String>) -> Self {
        MatchResult::Match {
            identifier: Some(id.into()),
        }
    }

    pub fn from_bool(hit: bool) -> Self {
        if hit {
            Self::matched()
        } else {
            MatchResult::NoMatch
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match { .. })
    }

    #[cfg(test)]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            MatchResult::Match { identifier } => identifier.as_deref(),
            MatchResult::NoMatch => None,
        }
    }

    /// Converts into the identifier payload, or `None` for no match.
    pub fn into_match(self) -> Option<Option<String>> {
        match self {
            MatchResult::Match { identifier } => Some(identifier),
            MatchResult::NoMatch => None,
        }
    }
}

/// Parses an absolute http(s) URL with a host. Anything else is `None`.
pub(crate) fn parse_web_url(raw: &str) -> Option<Url> {
    let parsed = Url::parse(raw.trim()).ok()?;
    match parsed.scheme() {
        "http" | "https" => {}
        _ => return None,
    }
    parsed.host_str()?;
    Some(parsed)
}

/// Lowercased host of an already parsed URL (the parser lowercases domains,
/// this also covers IP literals and keeps callers uniform).
pub(crate) fn host_of(url: &Url) -> String {
    url.host_str().unwrap_or_default().to_ascii_lowercase()
}

/// True if `host` is `domain` or a subdomain of it.
pub(crate) fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || (host.len() > domain.len()
            && host.ends_with(domain)
            && host.as_bytes()[host.len() - domain.len() - 1] == b'.')
}

pub(crate) fn host_matches_any(host: &str, domains: &[&str]) -> bool {
    domains.iter().any(|d| host_matches(host, d))
}

/// Runs `re` against `haystack` and returns the first capture group, if any.
pub(crate) fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parses `raw` and hands the URL with its lowercased host to `check` when the
/// host belongs to one of `domains`.
pub(crate) fn on_hosts<F>(raw: &str, domains: &[&str], check: F) -> MatchResult
where
    F: FnOnce(&Url, &str) -> MatchResult,
{
    let Some(url) = parse_web_url(raw) else {
        return MatchResult::NoMatch;
    };
    let host = host_of(&url);
    if !host_matches_any(&host, domains) {
        return MatchResult::NoMatch;
    }
    check(&url, &host)
}

/// Value of the first query parameter named `name`, if present and non-empty.
pub(crate) fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_web_schemes() {
        assert!(parse_web_url("ftp://x").is_none());
        assert!(parse_web_url("mailto:a@b.c").is_none());
        assert!(parse_web_url("not a url").is_none());
        assert!(parse_web_url("").is_none());
        assert!(parse_web_url("https://example.com").is_some());
    }

    #[test]
    fn host_matching_respects_label_boundaries() {
        assert!(host_matches("github.com", "github.com"));
        assert!(host_matches("gist.github.com", "github.com"));
        assert!(!host_matches("notgithub.com", "github.com"));
        assert!(!host_matches("github.com.evil.io", "github.com"));
    }

    #[test]
    fn host_is_lowercased() {
        let url = parse_web_url("https://GitHub.COM/x").unwrap();
        assert_eq!(host_of(&url), "github.com");
    }

    #[test]
    fn match_result_accessors() {
        let m = MatchResult::with_identifier("7");
        assert!(m.is_match());
        assert_eq!(m.identifier(), Some("7"));
        assert_eq!(MatchResult::NoMatch.into_match(), None);
        assert_eq!(MatchResult::from_bool(true), MatchResult::matched());
    }
}
