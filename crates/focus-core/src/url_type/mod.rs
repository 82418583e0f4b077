//! URL classification engine.
//!
//! A URL is classified by trying platform families in a fixed priority
//! order; the first family whose detectors match produces the
//! [`UrlTypeInfo`]. Highlight links come first so that a passage the user
//! captured wins over the identity of the page hosting it. Anything that
//! matches nothing, including unparseable input, gets the `other` record.
//!
//! # Examples
//!
//! - `detect_url_type("https://gitlab.com/org/repo/-/merge_requests/57")` →
//!   `merge-request`, identifier `57`
//! - `detect_url_type("https://github.com/org/repo/issues/42#:~:text=foo")` →
//!   `copy-link-highlight`
//! - `detect_url_type("not a url at all")` → `other`

pub mod ai_chatbot;
pub mod content;
pub mod git;
pub mod highlight;
mod info;
pub(crate) mod matcher;
pub mod project;
pub mod social;
pub mod tech;

#[cfg(test)]
mod tests;

pub use highlight::highlight_text;
pub use info::{TypeStyle, UrlType, UrlTypeInfo};
pub use matcher::MatchResult;

/// A single platform predicate.
pub type Detector = fn(&str) -> MatchResult;

/// A family resolver: detectors of one family tried in their declared order.
pub type Resolver = fn(&str) -> Option<UrlTypeInfo>;

/// Platform families, in no particular order; see [`RESOLVER_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Highlight,
    AiChatbot,
    Git,
    ProjectManagement,
    Content,
    Social,
    Tech,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Highlight => "highlight",
            Family::AiChatbot => "ai-chatbot",
            Family::Git => "git",
            Family::ProjectManagement => "project-management",
            Family::Content => "content",
            Family::Social => "social",
            Family::Tech => "tech",
        }
    }
}

/// Global resolution order. First match wins; the `other` fallback follows
/// the last entry.
pub const RESOLVER_ORDER: &[(Family, Resolver)] = &[
    (Family::Highlight, highlight::resolve),
    (Family::AiChatbot, ai_chatbot::resolve),
    (Family::Git, git::resolve),
    (Family::ProjectManagement, project::resolve),
    (Family::Content, content::resolve),
    (Family::Social, social::resolve),
    (Family::Tech, tech::resolve),
];

/// Classifies `url`. Total: never panics, never fails.
pub fn detect_url_type(url: &str) -> UrlTypeInfo {
    classify_with(url, RESOLVER_ORDER)
}

/// Runs `url` through an explicit resolver chain, falling back to `other`.
pub fn classify_with(url: &str, resolvers: &[(Family, Resolver)]) -> UrlTypeInfo {
    for (family, resolve) in resolvers {
        if let Some(info) = resolve(url) {
            tracing::debug!(
                family = family.as_str(),
                kind = info.kind.as_str(),
                "classified url"
            );
            return info;
        }
        tracing::trace!(family = family.as_str(), "no match");
    }
    tracing::debug!("url fell back to other");
    UrlTypeInfo::fallback()
}

/// First detector in `detectors` that matches, rendered with its style.
pub(crate) fn first_match(url: &str, detectors: &[(Detector, &TypeStyle)]) -> Option<UrlTypeInfo> {
    detectors.iter().find_map(|(detect, style)| {
        detect(url)
            .into_match()
            .map(|identifier| UrlTypeInfo::from_style(style, identifier))
    })
}
