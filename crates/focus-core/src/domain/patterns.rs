//! Fixed path patterns separating landing pages from content items.

use std::sync::LazyLock;

use regex::Regex;

/// `/`, `/home`, `/index.html`, `/main`, each with an optional trailing slash.
static HOMEPAGE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:/(?:home|index\.html|main))?/?$").expect("valid regex"));

/// Path shapes of individual content items (videos, threads, posts, profiles, playlists).
static CONTENT_PATHS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^/watch(?:/|$)",
        r"^/shorts/",
        r"^/reels?/",
        r"^/live/",
        r"^/search(?:/|$)",
        r"^/results(?:/|$)",
        r"/comments/",
        r"/status(?:es)?/\d+",
        r"^/posts?/",
        r"^/p/",
        r"^/(?:u|user|users)/",
        r"^/(?:c|channel)/",
        r"^/@[^/]+",
        r"^/playlist(?:/|$)",
        r"^/r/[^/]+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Query parameters that point at a specific item or search.
static CONTENT_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|&)(?:v|q|list|search_query)=[^&]").expect("valid regex"));

pub(super) fn is_homepage_path(path: &str) -> bool {
    HOMEPAGE_PATH.is_match(path)
}

pub(super) fn is_content_path(path: &str) -> bool {
    CONTENT_PATHS.iter().any(|re| re.is_match(path))
}

pub(super) fn is_content_query(query: &str) -> bool {
    CONTENT_QUERY.is_match(query)
}
