//! Strict "this text is a link" predicate.

use std::sync::LazyLock;

use regex::Regex;

static WHOLE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid regex"));

/// True only if the whole trimmed text is an http(s) URL.
///
/// Text that merely mentions a link ("check out https://x.com") is not a URL.
pub fn is_url(text: &str) -> bool {
    WHOLE_URL.is_match(text.trim())
}
