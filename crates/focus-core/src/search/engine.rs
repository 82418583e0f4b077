//! Supported search engines and their fixed URL shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::url_type::matcher::host_matches;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    DuckDuckGo,
    Yahoo,
}

/// Returned when parsing an engine name that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search engine: {0}")]
pub struct UnknownSearchEngine(pub String);

impl SearchEngine {
    pub const ALL: [SearchEngine; 4] = [
        SearchEngine::Google,
        SearchEngine::Bing,
        SearchEngine::DuckDuckGo,
        SearchEngine::Yahoo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
            SearchEngine::DuckDuckGo => "duckduckgo",
            SearchEngine::Yahoo => "yahoo",
        }
    }

    /// Result page the query parameter is appended to.
    pub fn base_url(self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search",
            SearchEngine::Bing => "https://www.bing.com/search",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/",
            SearchEngine::Yahoo => "https://search.yahoo.com/search",
        }
    }

    /// Name of the query parameter carrying the search terms.
    pub fn query_param(self) -> &'static str {
        match self {
            SearchEngine::Yahoo => "p",
            _ => "q",
        }
    }

    /// True if `host` (lowercased) serves this engine's result pages.
    pub fn serves_host(self, host: &str) -> bool {
        match self {
            SearchEngine::Google => {
                host_matches(host, "google.com")
                    || host.starts_with("google.")
                    || host.starts_with("www.google.")
            }
            SearchEngine::Bing => host_matches(host, "bing.com"),
            SearchEngine::DuckDuckGo => host_matches(host, "duckduckgo.com"),
            SearchEngine::Yahoo => host_matches(host, "search.yahoo.com"),
        }
    }

    /// Engine whose result pages live on `host`, if any.
    pub fn for_host(host: &str) -> Option<SearchEngine> {
        Self::ALL.into_iter().find(|e| e.serves_host(host))
    }

    /// Search URL for `query` on this engine, form-urlencoded.
    pub fn search_url(self, query: &str) -> String {
        let encoded: String =
            url::form_urlencoded::byte_serialize(query.trim().as_bytes()).collect();
        format!("{}?{}={}", self.base_url(), self.query_param(), encoded)
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchEngine {
    type Err = UnknownSearchEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(SearchEngine::Google),
            "bing" => Ok(SearchEngine::Bing),
            "duckduckgo" | "ddg" => Ok(SearchEngine::DuckDuckGo),
            "yahoo" => Ok(SearchEngine::Yahoo),
            _ => Err(UnknownSearchEngine(s.to_string())),
        }
    }
}
