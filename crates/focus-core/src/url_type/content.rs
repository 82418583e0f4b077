//! Content platforms: Notion, Figma, Medium, Dev.to, Hacker News, Stack Overflow.

use std::sync::LazyLock;

use regex::Regex;

use super::info::{TypeStyle, UrlType, UrlTypeInfo};
use super::matcher::{capture, on_hosts, query_param, MatchResult};
use super::Detector;

static FIGMA_FILE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:file|design|proto|board)/[A-Za-z0-9]+").expect("valid regex")
});
static MEDIUM_ARTICLE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^/p/[0-9a-f]+|-[0-9a-f]{8,}/?$)").expect("valid regex"));
static DEVTO_POST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([^/]+)/[^/]+/?$").expect("valid regex"));
static STACK_QUESTION_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/questions/(\d+)(?:/|$)").expect("valid regex"));

/// Dev.to top-level sections that share the `/<section>/<slug>` shape with posts.
const DEVTO_RESERVED: &[&str] = &["t", "settings", "search", "tags", "api", "enter"];

const STACK_EXCHANGE_HOSTS: &[&str] = &[
    "stackoverflow.com",
    "stackexchange.com",
    "superuser.com",
    "serverfault.com",
    "askubuntu.com",
];

const NOTION_PAGE: TypeStyle = TypeStyle {
    kind: UrlType::NotionPage,
    platform: "Notion",
    color: "#000000",
    icon: "notebook",
    label: "Page",
};

const FIGMA_DESIGN: TypeStyle = TypeStyle {
    kind: UrlType::FigmaDesign,
    platform: "Figma",
    color: "#F24E1E",
    icon: "figma",
    label: "Design",
};

const MEDIUM_ARTICLE: TypeStyle = TypeStyle {
    kind: UrlType::MediumArticle,
    platform: "Medium",
    color: "#12100E",
    icon: "book-open",
    label: "Article",
};

const DEVTO_POST: TypeStyle = TypeStyle {
    kind: UrlType::DevtoPost,
    platform: "DEV",
    color: "#0A0A0A",
    icon: "code",
    label: "Post",
};

const HACKERNEWS_POST: TypeStyle = TypeStyle {
    kind: UrlType::HackernewsPost,
    platform: "Hacker News",
    color: "#FF6600",
    icon: "flame",
    label: "Post",
};

const STACKOVERFLOW: TypeStyle = TypeStyle {
    kind: UrlType::Stackoverflow,
    platform: "Stack Overflow",
    color: "#F48024",
    icon: "help-circle",
    label: "Question",
};

pub fn detect_notion_page(url: &str) -> MatchResult {
    on_hosts(url, &["notion.so", "notion.site"], |parsed, _| {
        MatchResult::from_bool(parsed.path().len() > 1)
    })
}

pub fn detect_figma_design(url: &str) -> MatchResult {
    on_hosts(url, &["figma.com"], |parsed, _| {
        MatchResult::from_bool(FIGMA_FILE_PATH.is_match(parsed.path()))
    })
}

pub fn detect_medium_article(url: &str) -> MatchResult {
    on_hosts(url, &["medium.com"], |parsed, _| {
        MatchResult::from_bool(MEDIUM_ARTICLE_PATH.is_match(parsed.path()))
    })
}

pub fn detect_devto_post(url: &str) -> MatchResult {
    on_hosts(url, &["dev.to"], |parsed, _| {
        match capture(&DEVTO_POST_PATH, parsed.path()) {
            Some(section) => MatchResult::from_bool(!DEVTO_RESERVED.contains(&section.as_str())),
            None => MatchResult::NoMatch,
        }
    })
}

pub fn detect_hackernews_post(url: &str) -> MatchResult {
    on_hosts(url, &["news.ycombinator.com"], |parsed, _| {
        if parsed.path() != "/item" {
            return MatchResult::NoMatch;
        }
        query_param(parsed, "id")
            .filter(|id| id.bytes().all(|b| b.is_ascii_digit()))
            .map(MatchResult::with_identifier)
            .unwrap_or(MatchResult::NoMatch)
    })
}

pub fn detect_stackoverflow_question(url: &str) -> MatchResult {
    on_hosts(url, STACK_EXCHANGE_HOSTS, |parsed, _| {
        capture(&STACK_QUESTION_PATH, parsed.path())
            .map(MatchResult::with_identifier)
            .unwrap_or(MatchResult::NoMatch)
    })
}

const DETECTORS: &[(Detector, &TypeStyle)] = &[
    (detect_notion_page, &NOTION_PAGE),
    (detect_figma_design, &FIGMA_DESIGN),
    (detect_medium_article, &MEDIUM_ARTICLE),
    (detect_devto_post, &DEVTO_POST),
    (detect_hackernews_post, &HACKERNEWS_POST),
    (detect_stackoverflow_question, &STACKOVERFLOW),
];

pub fn resolve(url: &str) -> Option<UrlTypeInfo> {
    super::first_match(url, DETECTORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notion_page_but_not_root() {
        assert_eq!(
            resolve("https://www.notion.so/acme/Roadmap-0123456789abcdef").unwrap().kind,
            UrlType::NotionPage
        );
        assert!(detect_notion_page("https://acme.notion.site/Docs-abc").is_match());
        assert!(!detect_notion_page("https://www.notion.so/").is_match());
    }

    #[test]
    fn figma_file() {
        let info = resolve("https://www.figma.com/design/AbCdEf123/App?node-id=1-2").unwrap();
        assert_eq!(info.kind, UrlType::FigmaDesign);
        assert!(resolve("https://www.figma.com/pricing").is_none());
    }

    #[test]
    fn medium_article_slug() {
        assert!(
            detect_medium_article("https://medium.com/@someone/why-rust-4f2a9c1b3d5e").is_match()
        );
        assert!(detect_medium_article("https://blog.medium.com/p/4f2a9c1b3d5e").is_match());
        assert!(!detect_medium_article("https://medium.com/@someone").is_match());
    }

    #[test]
    fn devto_post_skips_tag_pages() {
        assert!(detect_devto_post("https://dev.to/alice/my-first-post-1a2b").is_match());
        assert!(!detect_devto_post("https://dev.to/t/rust").is_match());
        assert!(!detect_devto_post("https://dev.to/alice").is_match());
    }

    #[test]
    fn hackernews_item() {
        let info = resolve("https://news.ycombinator.com/item?id=38912345").unwrap();
        assert_eq!(info.kind, UrlType::HackernewsPost);
        assert_eq!(info.description, "Post #38912345");
        assert!(resolve("https://news.ycombinator.com/news").is_none());
    }

    #[test]
    fn stackoverflow_question() {
        let info = resolve("https://stackoverflow.com/questions/123456/how-to-borrow").unwrap();
        assert_eq!(info.kind, UrlType::Stackoverflow);
        assert_eq!(info.identifier.as_deref(), Some("123456"));
        assert_eq!(info.description, "Question #123456");
        assert!(
            detect_stackoverflow_question("https://unix.stackexchange.com/questions/7/x").is_match()
        );
    }
}
