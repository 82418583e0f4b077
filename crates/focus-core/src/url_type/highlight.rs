//! "Copy link to highlight" URLs (Text Fragments, `#:~:text=...`).
//!
//! The fragment directive may follow a regular fragment
//! (`#section:~:text=foo`). Several directives can be chained with `&`.

use super::ai_chatbot::chatbot_style;
use super::info::{TypeStyle, UrlType, UrlTypeInfo};
use super::matcher::{host_of, parse_web_url, MatchResult};

const FRAGMENT_DIRECTIVE: &str = ":~:";

const COPY_LINK_HIGHLIGHT: TypeStyle = TypeStyle {
    kind: UrlType::CopyLinkHighlight,
    platform: "Website",
    color: "#FBBF24",
    icon: "highlighter",
    label: "Highlight",
};

/// The fragment directive part of a URL (everything after `:~:`), if it
/// carries a `text=` directive with a non-empty passage.
fn text_directives(url: &str) -> Option<String> {
    let parsed = parse_web_url(url)?;
    let fragment = parsed.fragment()?;
    let (_, directives) = fragment.split_once(FRAGMENT_DIRECTIVE)?;
    directives
        .split('&')
        .filter_map(|d| d.strip_prefix("text="))
        .any(|value| !value.is_empty())
        .then(|| directives.to_string())
}

pub fn detect_text_fragment(url: &str) -> MatchResult {
    MatchResult::from_bool(text_directives(url).is_some())
}

/// Decoded passage referenced by the first `text=` directive.
///
/// Context terms (`prefix-,` and `,-suffix`) are dropped; a range
/// `start,end` is rendered as `start…end`.
pub fn highlight_text(url: &str) -> Option<String> {
    let directives = text_directives(url)?;
    let value = directives
        .split('&')
        .filter_map(|d| d.strip_prefix("text="))
        .find(|value| !value.is_empty())?;

    let mut terms: Vec<&str> = value.split(',').collect();
    if terms.len() > 1 && terms.first().is_some_and(|t| t.ends_with('-')) {
        terms.remove(0);
    }
    if terms.len() > 1 && terms.last().is_some_and(|t| t.starts_with('-')) {
        terms.pop();
    }

    let decoded: Vec<String> = terms
        .iter()
        .map(|t| percent_decode(t))
        .filter(|t| !t.is_empty())
        .collect();
    if decoded.is_empty() {
        None
    } else {
        Some(decoded.join("…"))
    }
}

/// Highlight links always resolve, whatever the hosting platform. On a known
/// chatbot the record becomes `ai-chatbot-highlight` for that chatbot.
pub fn resolve(url: &str) -> Option<UrlTypeInfo> {
    if !detect_text_fragment(url).is_match() {
        return None;
    }

    if let Some(chatbot) = chatbot_style(url) {
        let style = TypeStyle {
            kind: UrlType::AiChatbotHighlight,
            icon: COPY_LINK_HIGHLIGHT.icon,
            ..*chatbot
        };
        return Some(UrlTypeInfo::with_text(
            &style,
            chatbot.platform.to_string(),
            format!("{} Highlight", chatbot.platform),
        ));
    }

    let host = parse_web_url(url).map(|u| host_of(&u)).unwrap_or_default();
    let source = host.strip_prefix("www.").unwrap_or(&host).to_string();
    Some(UrlTypeInfo::with_text(
        &COPY_LINK_HIGHLIGHT,
        source.clone(),
        format!("Highlight from {source}"),
    ))
}

/// Percent-decode a text directive term; invalid escapes are kept as-is.
fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.as_bytes().iter().copied();
    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.push(b);
            continue;
        }
        let h = bytes.next();
        let l = bytes.next();
        match (h.and_then(hex_digit), l.and_then(hex_digit)) {
            (Some(high), Some(low)) => out.push(high << 4 | low),
            _ => {
                out.push(b'%');
                out.extend(h);
                out.extend(l);
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
