//! Classification output record and the per-type style constants it is built from.

use serde::Serialize;

/// Closed set of URL categories produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlType {
    MergeRequest,
    PullRequest,
    GithubIssue,
    GitlabIssue,
    JiraTicket,
    ConfluencePage,
    LinearTicket,
    AsanaTask,
    TrelloCard,
    NotionPage,
    FigmaDesign,
    MediumArticle,
    DevtoPost,
    HackernewsPost,
    Stackoverflow,
    YoutubeVideo,
    RedditPost,
    TwitterPost,
    LinkedinPost,
    SlackChannel,
    DiscordChannel,
    NpmPackage,
    DockerHub,
    KubernetesDocs,
    AwsDocs,
    GcpDocs,
    AzureDocs,
    Documentation,
    ApiDocs,
    AiChatbot,
    AiChatbotHighlight,
    CopyLinkHighlight,
    Other,
}

impl UrlType {
    pub fn as_str(self) -> &'static str {
        match self {
            UrlType::MergeRequest => "merge-request",
            UrlType::PullRequest => "pull-request",
            UrlType::GithubIssue => "github-issue",
            UrlType::GitlabIssue => "gitlab-issue",
            UrlType::JiraTicket => "jira-ticket",
            UrlType::ConfluencePage => "confluence-page",
            UrlType::LinearTicket => "linear-ticket",
            UrlType::AsanaTask => "asana-task",
            UrlType::TrelloCard => "trello-card",
            UrlType::NotionPage => "notion-page",
            UrlType::FigmaDesign => "figma-design",
            UrlType::MediumArticle => "medium-article",
            UrlType::DevtoPost => "devto-post",
            UrlType::HackernewsPost => "hackernews-post",
            UrlType::Stackoverflow => "stackoverflow",
            UrlType::YoutubeVideo => "youtube-video",
            UrlType::RedditPost => "reddit-post",
            UrlType::TwitterPost => "twitter-post",
            UrlType::LinkedinPost => "linkedin-post",
            UrlType::SlackChannel => "slack-channel",
            UrlType::DiscordChannel => "discord-channel",
            UrlType::NpmPackage => "npm-package",
            UrlType::DockerHub => "docker-hub",
            UrlType::KubernetesDocs => "kubernetes-docs",
            UrlType::AwsDocs => "aws-docs",
            UrlType::GcpDocs => "gcp-docs",
            UrlType::AzureDocs => "azure-docs",
            UrlType::Documentation => "documentation",
            UrlType::ApiDocs => "api-docs",
            UrlType::AiChatbot => "ai-chatbot",
            UrlType::AiChatbotHighlight => "ai-chatbot-highlight",
            UrlType::CopyLinkHighlight => "copy-link-highlight",
            UrlType::Other => "other",
        }
    }
}

impl std::fmt::Display for UrlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static presentation data for one URL type.
///
/// `label` is the noun phrase used for the description; an extracted
/// identifier is appended to it by [`UrlTypeInfo::from_style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeStyle {
    pub kind: UrlType,
    pub platform: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Classification result for a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlTypeInfo {
    #[serde(rename = "type")]
    pub kind: UrlType,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub color: &'static str,
    pub icon: &'static str,
    pub description: String,
}

/// Record returned when nothing more specific matches.
pub(crate) const FALLBACK: TypeStyle = TypeStyle {
    kind: UrlType::Other,
    platform: "Website",
    color: "#6B7280",
    icon: "globe",
    label: "Web Page",
};

impl UrlTypeInfo {
    /// Builds a record from a style entry.
    ///
    /// When `identifier` is present the description always embeds it:
    /// numeric ids render as `"<label> #<id>"`, keys such as `PROJ-7` as
    /// `"<label> PROJ-7"`.
    pub fn from_style(style: &TypeStyle, identifier: Option<String>) -> Self {
        let description = match identifier.as_deref() {
            Some(id) if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) => {
                format!("{} #{}", style.label, id)
            }
            Some(id) if !id.is_empty() => format!("{} {}", style.label, id),
            _ => style.label.to_string(),
        };
        Self {
            kind: style.kind,
            platform: style.platform.to_string(),
            identifier: identifier.filter(|id| !id.is_empty()),
            color: style.color,
            icon: style.icon,
            description,
        }
    }

    /// Same as [`from_style`](Self::from_style) but with a computed platform
    /// name and description (used for highlight links).
    pub(crate) fn with_text(style: &TypeStyle, platform: String, description: String) -> Self {
        Self {
            kind: style.kind,
            platform,
            identifier: None,
            color: style.color,
            icon: style.icon,
            description,
        }
    }

    /// The `other` record: globe icon, gray accent, "Web Page".
    pub fn fallback() -> Self {
        Self::from_style(&FALLBACK, None)
    }

    pub fn is_fallback(&self) -> bool {
        self.kind == UrlType::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKET: TypeStyle = TypeStyle {
        kind: UrlType::JiraTicket,
        platform: "Jira",
        color: "#0052CC",
        icon: "ticket",
        label: "Ticket",
    };

    #[test]
    fn numeric_identifier_gets_hash_prefix() {
        let info = UrlTypeInfo::from_style(&TICKET, Some("42".to_string()));
        assert_eq!(info.description, "Ticket #42");
        assert_eq!(info.identifier.as_deref(), Some("42"));
    }

    #[test]
    fn key_identifier_is_appended_verbatim() {
        let info = UrlTypeInfo::from_style(&TICKET, Some("PROJ-7".to_string()));
        assert_eq!(info.description, "Ticket PROJ-7");
    }

    #[test]
    fn empty_identifier_is_dropped() {
        let info = UrlTypeInfo::from_style(&TICKET, Some(String::new()));
        assert_eq!(info.description, "Ticket");
        assert!(info.identifier.is_none());
    }

    #[test]
    fn fallback_record() {
        let info = UrlTypeInfo::fallback();
        assert_eq!(info.kind, UrlType::Other);
        assert_eq!(info.platform, "Website");
        assert_eq!(info.icon, "globe");
        assert_eq!(info.description, "Web Page");
        assert!(info.is_fallback());
    }

    #[test]
    fn serializes_type_tag_in_kebab_case() {
        let info = UrlTypeInfo::from_style(&TICKET, Some("PROJ-7".to_string()));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "jira-ticket");
        assert_eq!(json["identifier"], "PROJ-7");
        assert_eq!(
            serde_json::to_value(UrlType::AiChatbotHighlight).unwrap(),
            "ai-chatbot-highlight"
        );
    }
}
