//! Domain policy helpers for distraction blocking.
//!
//! The blocking caller redirects away from the landing page of a distracting
//! site but lets deep links to a specific piece of content through:
//! `should_redirect` is "distracting AND homepage AND NOT specific content".

mod patterns;

use serde::Serialize;
use url::Url;

use crate::url_type::matcher::host_matches;

/// Everything the blocking caller needs to decide about one page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainInfo {
    pub domain: String,
    pub is_homepage: bool,
    pub is_specific_content: bool,
    pub is_distracting: bool,
    pub should_redirect: bool,
}

/// Lowercased hostname of `url`, or an empty string if it cannot be parsed.
pub fn extract_domain(url: &str) -> String {
    Url::parse(url.trim())
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .unwrap_or_default()
}

pub fn is_homepage(url: &str) -> bool {
    Url::parse(url.trim())
        .map(|u| patterns::is_homepage_path(u.path()))
        .unwrap_or(false)
}

/// True if the path or query string points at an individual content item
/// (video, search results, thread, post, profile, playlist).
pub fn is_specific_content(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return false;
    };
    patterns::is_content_path(parsed.path())
        || parsed.query().is_some_and(patterns::is_content_query)
}

/// Canonical form of a configured domain entry: trimmed, lowercased, no `www.`.
pub fn normalize_domain_entry(entry: &str) -> String {
    let lowered = entry.trim().trim_end_matches('.').to_ascii_lowercase();
    match lowered.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

/// True if the URL's domain equals, or is a subdomain of, any entry in `domains`.
pub fn is_distracting_domain<S: AsRef<str>>(url: &str, domains: &[S]) -> bool {
    let domain = extract_domain(url);
    if domain.is_empty() {
        return false;
    }
    domains
        .iter()
        .map(|d| normalize_domain_entry(d.as_ref()))
        .filter(|d| !d.is_empty())
        .any(|d| host_matches(&domain, &d))
}

pub fn should_redirect<S: AsRef<str>>(url: &str, domains: &[S]) -> bool {
    is_distracting_domain(url, domains) && is_homepage(url) && !is_specific_content(url)
}

pub fn get_domain_info<S: AsRef<str>>(url: &str, domains: &[S]) -> DomainInfo {
    let is_homepage = is_homepage(url);
    let is_specific_content = is_specific_content(url);
    let is_distracting = is_distracting_domain(url, domains);
    let info = DomainInfo {
        domain: extract_domain(url),
        is_homepage,
        is_specific_content,
        is_distracting,
        should_redirect: is_distracting && is_homepage && !is_specific_content,
    };
    tracing::debug!(
        domain = %info.domain,
        should_redirect = info.should_redirect,
        "domain info"
    );
    info
}
