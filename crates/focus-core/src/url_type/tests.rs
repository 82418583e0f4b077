//! Pipeline-level tests: priority order, totality, fallback.

use super::*;

#[test]
fn resolver_order_is_fixed() {
    let order: Vec<Family> = RESOLVER_ORDER.iter().map(|(f, _)| *f).collect();
    assert_eq!(
        order,
        vec![
            Family::Highlight,
            Family::AiChatbot,
            Family::Git,
            Family::ProjectManagement,
            Family::Content,
            Family::Social,
            Family::Tech,
        ]
    );
}

#[test]
fn highlight_beats_platform_identity() {
    let info = detect_url_type("https://github.com/org/repo/issues/42#:~:text=foo");
    assert_eq!(info.kind, UrlType::CopyLinkHighlight);
    assert_eq!(info.platform, "github.com");
    assert_eq!(info.description, "Highlight from github.com");
}

#[test]
fn chatbot_highlight_combination() {
    let info = detect_url_type("https://gemini.google.com/app/abc123#:~:text=hello");
    assert_eq!(info.kind, UrlType::AiChatbotHighlight);
    assert_eq!(info.platform, "Gemini");
    assert!(info.description.contains("Gemini"));
}

#[test]
fn chatbot_highlight_keyed_on_host_alone() {
    let info = detect_url_type("https://chatgpt.com/share/6650-aa#:~:text=hello");
    assert_eq!(info.kind, UrlType::AiChatbotHighlight);
    assert_eq!(info.platform, "ChatGPT");

    // Without the highlight, a share page is not a conversation.
    assert_eq!(detect_url_type("https://chatgpt.com/share/6650-aa").kind, UrlType::Other);
}

#[test]
fn empty_text_directive_falls_through_to_platform() {
    let info = detect_url_type("https://github.com/org/repo/issues/42#:~:text=");
    assert_eq!(info.kind, UrlType::GithubIssue);
}

#[test]
fn chatbot_beats_social_on_shared_host() {
    // x.com hosts both posts and Grok conversations.
    assert_eq!(detect_url_type("https://x.com/i/grok").kind, UrlType::AiChatbot);
    assert_eq!(
        detect_url_type("https://x.com/someone/status/1").kind,
        UrlType::TwitterPost
    );
}

#[test]
fn merge_request_identifier_in_description() {
    let info = detect_url_type("https://gitlab.com/org/repo/-/merge_requests/57");
    assert_eq!(info.kind, UrlType::MergeRequest);
    assert_eq!(info.identifier.as_deref(), Some("57"));
    assert!(info.description.contains("57"));
}

#[test]
fn git_beats_generic_docs() {
    let info = detect_url_type("https://github.com/org/docs/pull/3");
    assert_eq!(info.kind, UrlType::PullRequest);
}

#[test]
fn garbage_falls_back_to_other() {
    for input in ["not a url at all", "", "ftp://x", "https://", "http://[::1", "   "] {
        let info = detect_url_type(input);
        assert_eq!(info.kind, UrlType::Other, "input {input:?}");
        assert_eq!(info.platform, "Website");
        assert_eq!(info.description, "Web Page");
        assert_eq!(info.icon, "globe");
    }
}

#[test]
fn unknown_site_falls_back_to_other() {
    assert!(detect_url_type("https://example.com/some/page").is_fallback());
}

#[test]
fn classification_is_total_over_odd_inputs() {
    let inputs = [
        "https://example.com/#:~:text=",
        "https://example.com/#:~:text=%",
        "https://github.com//issues/1",
        "https://news.ycombinator.com/item?id=",
        "https://www.youtube.com/watch?v=",
        "https://acme.atlassian.net/browse/",
        "javascript:alert(1)",
        "https://ünicode.example/docs/ü",
        "https://example.com:99999/",
    ];
    for input in inputs {
        let info = detect_url_type(input);
        assert!(!info.kind.as_str().is_empty());
        assert!(!info.description.is_empty());
    }
}

#[test]
fn identifiers_always_appear_in_description() {
    let urls = [
        "https://github.com/a/b/pull/9",
        "https://github.com/a/b/issues/10",
        "https://gitlab.com/a/b/-/issues/11",
        "https://acme.atlassian.net/browse/ABC-12",
        "https://linear.app/acme/issue/ENG-13",
        "https://news.ycombinator.com/item?id=14",
        "https://stackoverflow.com/questions/15/x",
    ];
    for url in urls {
        let info = detect_url_type(url);
        let id = info.identifier.as_deref().expect("identifier extracted");
        assert!(info.description.contains(id), "{url}: {}", info.description);
    }
}

#[test]
fn custom_chain_is_respected() {
    let url = "https://github.com/org/repo/issues/42#:~:text=foo";
    let without_highlight = &RESOLVER_ORDER[1..];
    assert_eq!(classify_with(url, without_highlight).kind, UrlType::GithubIssue);
    assert!(classify_with(url, &[]).is_fallback());
}
