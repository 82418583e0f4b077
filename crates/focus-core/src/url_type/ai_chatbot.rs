//! AI chatbot conversations: Gemini, Copilot, Perplexity, Grok, ChatGPT.
//!
//! A chatbot URL needs both a known host and a conversation-shaped path; the
//! landing page of each product is not a match.

use std::sync::LazyLock;

use regex::Regex;

use super::info::{TypeStyle, UrlType, UrlTypeInfo};
use super::matcher::{host_matches_any, host_of, on_hosts, parse_web_url, MatchResult};
use super::Detector;

static GEMINI_CHAT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:app|gem)/[^/]+").expect("valid regex"));
static COPILOT_CHAT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:chats|c)/[^/]+").expect("valid regex"));
static PERPLEXITY_CHAT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/search/[^/]+").expect("valid regex"));
static GROK_CHAT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:c|chat)/[^/]+").expect("valid regex"));
static GROK_ON_X_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/i/grok(?:/|$)").expect("valid regex"));
static CHATGPT_CHAT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:g/[^/]+/)?c/[^/]+").expect("valid regex"));

const GEMINI: TypeStyle = TypeStyle {
    kind: UrlType::AiChatbot,
    platform: "Gemini",
    color: "#8E75B2",
    icon: "sparkles",
    label: "Gemini Chat",
};

const COPILOT: TypeStyle = TypeStyle {
    kind: UrlType::AiChatbot,
    platform: "Copilot",
    color: "#0078D4",
    icon: "sparkles",
    label: "Copilot Chat",
};

const PERPLEXITY: TypeStyle = TypeStyle {
    kind: UrlType::AiChatbot,
    platform: "Perplexity",
    color: "#20808D",
    icon: "sparkles",
    label: "Perplexity Thread",
};

const GROK: TypeStyle = TypeStyle {
    kind: UrlType::AiChatbot,
    platform: "Grok",
    color: "#000000",
    icon: "sparkles",
    label: "Grok Chat",
};

const CHATGPT: TypeStyle = TypeStyle {
    kind: UrlType::AiChatbot,
    platform: "ChatGPT",
    color: "#10A37F",
    icon: "sparkles",
    label: "ChatGPT Chat",
};

pub fn detect_gemini(url: &str) -> MatchResult {
    on_hosts(url, &["gemini.google.com"], |parsed, _| {
        MatchResult::from_bool(GEMINI_CHAT_PATH.is_match(parsed.path()))
    })
}

pub fn detect_copilot(url: &str) -> MatchResult {
    on_hosts(url, &["copilot.microsoft.com"], |parsed, _| {
        MatchResult::from_bool(COPILOT_CHAT_PATH.is_match(parsed.path()))
    })
}

pub fn detect_perplexity(url: &str) -> MatchResult {
    on_hosts(url, &["perplexity.ai"], |parsed, _| {
        MatchResult::from_bool(PERPLEXITY_CHAT_PATH.is_match(parsed.path()))
    })
}

pub fn detect_grok(url: &str) -> MatchResult {
    on_hosts(url, &["grok.com", "x.com"], |parsed, host| {
        let re: &Regex = if host == "grok.com" || host.ends_with(".grok.com") {
            &GROK_CHAT_PATH
        } else {
            &GROK_ON_X_PATH
        };
        MatchResult::from_bool(re.is_match(parsed.path()))
    })
}

pub fn detect_chatgpt(url: &str) -> MatchResult {
    on_hosts(url, &["chatgpt.com", "chat.openai.com"], |parsed, _| {
        MatchResult::from_bool(CHATGPT_CHAT_PATH.is_match(parsed.path()))
    })
}

const DETECTORS: &[(Detector, &TypeStyle)] = &[
    (detect_gemini, &GEMINI),
    (detect_copilot, &COPILOT),
    (detect_perplexity, &PERPLEXITY),
    (detect_grok, &GROK),
    (detect_chatgpt, &CHATGPT),
];

/// Hosts that only serve a chatbot, so any page on them belongs to it.
/// `x.com` is absent: only its `/i/grok` pages are Grok.
const CHATBOT_HOSTS: &[(&[&str], &TypeStyle)] = &[
    (&["gemini.google.com"], &GEMINI),
    (&["copilot.microsoft.com"], &COPILOT),
    (&["perplexity.ai"], &PERPLEXITY),
    (&["grok.com"], &GROK),
    (&["chatgpt.com", "chat.openai.com"], &CHATGPT),
];

/// Style of the chatbot a URL's host belongs to, if any. Shared with
/// highlight resolution, which does not require a conversation path.
pub(crate) fn chatbot_style(url: &str) -> Option<&'static TypeStyle> {
    let by_host = parse_web_url(url).and_then(|parsed| {
        let host = host_of(&parsed);
        CHATBOT_HOSTS
            .iter()
            .find(|(domains, _)| host_matches_any(&host, domains))
            .map(|(_, style)| *style)
    });
    by_host.or_else(|| {
        DETECTORS
            .iter()
            .find(|(detect, _)| detect(url).is_match())
            .map(|(_, style)| *style)
    })
}

pub fn resolve(url: &str) -> Option<UrlTypeInfo> {
    super::first_match(url, DETECTORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_chatbot_conversation() {
        let cases = [
            ("https://gemini.google.com/app/abc123", "Gemini"),
            ("https://copilot.microsoft.com/chats/xyz", "Copilot"),
            ("https://www.perplexity.ai/search/what-is-rust-abc", "Perplexity"),
            ("https://grok.com/c/0f1e2d", "Grok"),
            ("https://x.com/i/grok?conversation=1", "Grok"),
            ("https://chatgpt.com/c/6650-aa", "ChatGPT"),
            ("https://chatgpt.com/g/g-abc-helper/c/6650-aa", "ChatGPT"),
            ("https://chat.openai.com/c/123", "ChatGPT"),
        ];
        for (url, platform) in cases {
            let info = resolve(url).unwrap_or_else(|| panic!("no match for {url}"));
            assert_eq!(info.kind, UrlType::AiChatbot, "{url}");
            assert_eq!(info.platform, platform, "{url}");
        }
    }

    #[test]
    fn landing_pages_are_not_conversations() {
        assert!(resolve("https://gemini.google.com/").is_none());
        assert!(resolve("https://gemini.google.com/app").is_none());
        assert!(resolve("https://chatgpt.com/").is_none());
        assert!(resolve("https://www.perplexity.ai/").is_none());
        assert!(resolve("https://x.com/rustlang").is_none());
    }

    #[test]
    fn chatbot_style_lookup() {
        assert_eq!(
            chatbot_style("https://gemini.google.com/app/abc").map(|s| s.platform),
            Some("Gemini")
        );
        assert!(chatbot_style("https://example.com/app/abc").is_none());
    }

    #[test]
    fn chatbot_style_matches_any_page_on_a_chatbot_host() {
        assert_eq!(
            chatbot_style("https://chatgpt.com/share/6650-aa").map(|s| s.platform),
            Some("ChatGPT")
        );
        assert_eq!(
            chatbot_style("https://www.perplexity.ai/").map(|s| s.platform),
            Some("Perplexity")
        );
        assert_eq!(
            chatbot_style("https://x.com/i/grok?conversation=1").map(|s| s.platform),
            Some("Grok")
        );
        assert!(chatbot_style("https://x.com/rustlang").is_none());
        // Host alone does not make a conversation.
        assert!(resolve("https://chatgpt.com/share/6650-aa").is_none());
    }
}
