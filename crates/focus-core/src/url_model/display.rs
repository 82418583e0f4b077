//! Compact, human-readable rendering of a URL.

/// Maximum characters of query string (or of unparseable input) shown.
const MAX_DISPLAY_CHARS: usize = 50;
const ELLIPSIS: &str = "...";

/// Renders `url` without scheme or leading `www.`.
///
/// The path is appended unless it is `/`; a query string is appended with its
/// `?` and cut to 50 characters. Unparseable input is cut to 50 characters.
///
/// # Examples
///
/// - `format_url_for_display("https://www.example.com/")` → `"example.com"`
/// - `format_url_for_display("https://example.com/a?x=1")` → `"example.com/a?x=1"`
pub fn format_url_for_display(url: &str) -> String {
    let parsed = match url::Url::parse(url.trim()) {
        Ok(p) if p.host_str().is_some() => p,
        _ => return truncate(url, MAX_DISPLAY_CHARS),
    };

    let host = parsed.host_str().unwrap_or_default();
    let mut out = host.strip_prefix("www.").unwrap_or(host).to_string();
    if let Some(port) = parsed.port() {
        out.push_str(&format!(":{port}"));
    }

    let path = parsed.path();
    if path != "/" {
        out.push_str(path);
    }

    if let Some(query) = parsed.query().filter(|q| !q.is_empty()) {
        out.push_str(&truncate(&format!("?{query}"), MAX_DISPLAY_CHARS));
    }
    out
}

/// First `max` characters of `s`, with an ellipsis if anything was cut.
fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}{}", &s[..byte_idx], ELLIPSIS),
        None => s.to_string(),
    }
}
