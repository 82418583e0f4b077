//! Project management: Jira, Confluence, Linear, Asana, Trello.

use std::sync::LazyLock;

use regex::Regex;

use super::info::{TypeStyle, UrlType, UrlTypeInfo};
use super::matcher::{
    capture, host_matches, host_of, on_hosts, parse_web_url, query_param, MatchResult,
};
use super::Detector;

static JIRA_BROWSE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/browse/([A-Z][A-Z0-9]+-\d+)(?:/|$)").expect("valid regex")
});
static JIRA_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][A-Z0-9]+-\d+)$").expect("valid regex"));
static LINEAR_ISSUE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/[^/]+/issue/([A-Za-z][A-Za-z0-9]*-\d+)(?:/|$)").expect("valid regex")
});
static ASANA_TASK_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/0/\d+/\d+(?:/|$)").expect("valid regex"));
static TRELLO_CARD_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/c/[A-Za-z0-9]+(?:/|$)").expect("valid regex"));

const JIRA_TICKET: TypeStyle = TypeStyle {
    kind: UrlType::JiraTicket,
    platform: "Jira",
    color: "#0052CC",
    icon: "ticket",
    label: "Ticket",
};

const CONFLUENCE_PAGE: TypeStyle = TypeStyle {
    kind: UrlType::ConfluencePage,
    platform: "Confluence",
    color: "#172B4D",
    icon: "file-text",
    label: "Confluence Page",
};

const LINEAR_TICKET: TypeStyle = TypeStyle {
    kind: UrlType::LinearTicket,
    platform: "Linear",
    color: "#5E6AD2",
    icon: "ticket",
    label: "Issue",
};

const ASANA_TASK: TypeStyle = TypeStyle {
    kind: UrlType::AsanaTask,
    platform: "Asana",
    color: "#F06A6A",
    icon: "check-square",
    label: "Task",
};

const TRELLO_CARD: TypeStyle = TypeStyle {
    kind: UrlType::TrelloCard,
    platform: "Trello",
    color: "#0079BF",
    icon: "trello",
    label: "Card",
};

fn is_jira_host(host: &str) -> bool {
    host_matches(host, "atlassian.net") || host.starts_with("jira.")
}

/// Jira issue key from `/browse/KEY-N`, or from `selectedIssue=KEY-N` on board views.
pub fn detect_jira_ticket(url: &str) -> MatchResult {
    let Some(parsed) = parse_web_url(url) else {
        return MatchResult::NoMatch;
    };
    if !is_jira_host(&host_of(&parsed)) {
        return MatchResult::NoMatch;
    }
    capture(&JIRA_BROWSE_PATH, parsed.path())
        .or_else(|| {
            query_param(&parsed, "selectedIssue").filter(|key| JIRA_KEY.is_match(key))
        })
        .map(MatchResult::with_identifier)
        .unwrap_or(MatchResult::NoMatch)
}

pub fn detect_confluence_page(url: &str) -> MatchResult {
    let Some(parsed) = parse_web_url(url) else {
        return MatchResult::NoMatch;
    };
    let host = host_of(&parsed);
    let path = parsed.path();
    if host_matches(&host, "atlassian.net") {
        return MatchResult::from_bool(path.starts_with("/wiki/"));
    }
    MatchResult::from_bool(host.starts_with("confluence.") && path.len() > 1)
}

pub fn detect_linear_ticket(url: &str) -> MatchResult {
    on_hosts(url, &["linear.app"], |parsed, _| {
        capture(&LINEAR_ISSUE_PATH, parsed.path())
            .map(|key| MatchResult::with_identifier(key.to_ascii_uppercase()))
            .unwrap_or(MatchResult::NoMatch)
    })
}

pub fn detect_asana_task(url: &str) -> MatchResult {
    on_hosts(url, &["app.asana.com"], |parsed, _| {
        MatchResult::from_bool(ASANA_TASK_PATH.is_match(parsed.path()))
    })
}

pub fn detect_trello_card(url: &str) -> MatchResult {
    on_hosts(url, &["trello.com"], |parsed, _| {
        MatchResult::from_bool(TRELLO_CARD_PATH.is_match(parsed.path()))
    })
}

const DETECTORS: &[(Detector, &TypeStyle)] = &[
    (detect_jira_ticket, &JIRA_TICKET),
    (detect_confluence_page, &CONFLUENCE_PAGE),
    (detect_linear_ticket, &LINEAR_TICKET),
    (detect_asana_task, &ASANA_TASK),
    (detect_trello_card, &TRELLO_CARD),
];

pub fn resolve(url: &str) -> Option<UrlTypeInfo> {
    super::first_match(url, DETECTORS)
}
