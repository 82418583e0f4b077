//! Search URL builder and its inverse.

mod engine;

pub use engine::{SearchEngine, UnknownSearchEngine};

use crate::url_type::matcher::{host_of, parse_web_url, query_param};

/// Search URL for `query` on the engine named `engine`.
///
/// Unknown engine names fall back to Google.
pub fn get_search_url(query: &str, engine: &str) -> String {
    let engine = engine.parse::<SearchEngine>().unwrap_or_else(|err| {
        tracing::debug!("{err}; using {}", SearchEngine::default());
        SearchEngine::default()
    });
    engine.search_url(query)
}

/// Search terms of a result page URL from a known engine.
pub fn extract_search_query(url: &str) -> Option<String> {
    let parsed = parse_web_url(url)?;
    let engine = SearchEngine::for_host(&host_of(&parsed))?;
    query_param(&parsed, engine.query_param())
}

/// True if `url` is hosted by one of the known search engines.
pub fn is_search_engine_result(url: &str) -> bool {
    parse_web_url(url)
        .map(|u| SearchEngine::for_host(&host_of(&u)).is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_engine_urls() {
        assert_eq!(
            get_search_url("rust ownership", "google"),
            "https://www.google.com/search?q=rust+ownership"
        );
        assert_eq!(
            get_search_url("rust ownership", "duckduckgo"),
            "https://duckduckgo.com/?q=rust+ownership"
        );
    }

    #[test]
    fn unknown_engine_defaults_to_google() {
        assert_eq!(get_search_url("x", "nope"), get_search_url("x", "google"));
        assert_eq!(get_search_url("x", ""), "https://www.google.com/search?q=x");
    }

    #[test]
    fn round_trip_through_every_engine() {
        for engine in SearchEngine::ALL {
            let url = get_search_url("rust ownership", engine.as_str());
            assert_eq!(
                extract_search_query(&url).as_deref(),
                Some("rust ownership"),
                "{engine}"
            );
        }
    }

    #[test]
    fn extract_handles_foreign_and_empty() {
        assert_eq!(extract_search_query("https://example.com/?q=rust"), None);
        assert_eq!(extract_search_query("https://www.google.com/search?q="), None);
        assert_eq!(extract_search_query("https://www.bing.com/"), None);
        assert_eq!(extract_search_query("garbage"), None);
    }

    #[test]
    fn result_host_membership() {
        assert!(is_search_engine_result("https://www.bing.com/search?q=a"));
        assert!(is_search_engine_result("https://search.yahoo.com/search?p=a"));
        assert!(!is_search_engine_result("https://example.com/search?q=a"));
        assert!(!is_search_engine_result(""));
    }
}
