//! Git hosting: GitLab merge requests and issues, GitHub pull requests and issues.

use std::sync::LazyLock;

use regex::Regex;

use super::info::{TypeStyle, UrlType, UrlTypeInfo};
use super::matcher::{capture, host_of, parse_web_url, MatchResult};
use super::Detector;

static MERGE_REQUEST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/merge_requests/(\d+)(?:/|$)").expect("valid regex"));
static GITHUB_PULL_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[^/]+/[^/]+/pull/(\d+)(?:/|$)").expect("valid regex"));
static GITHUB_ISSUE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[^/]+/[^/]+/issues/(\d+)(?:/|$)").expect("valid regex"));
static GITLAB_ISSUE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/issues/(\d+)(?:/|$)").expect("valid regex"));

const MERGE_REQUEST: TypeStyle = TypeStyle {
    kind: UrlType::MergeRequest,
    platform: "GitLab",
    color: "#FC6D26",
    icon: "git-merge",
    label: "Merge Request",
};

const PULL_REQUEST: TypeStyle = TypeStyle {
    kind: UrlType::PullRequest,
    platform: "GitHub",
    color: "#238636",
    icon: "git-pull-request",
    label: "Pull Request",
};

const GITHUB_ISSUE: TypeStyle = TypeStyle {
    kind: UrlType::GithubIssue,
    platform: "GitHub",
    color: "#24292F",
    icon: "circle-dot",
    label: "Issue",
};

const GITLAB_ISSUE: TypeStyle = TypeStyle {
    kind: UrlType::GitlabIssue,
    platform: "GitLab",
    color: "#E24329",
    icon: "circle-dot",
    label: "Issue",
};

/// gitlab.com, or a self-hosted instance whose first host label is `gitlab`.
fn is_gitlab_host(host: &str) -> bool {
    host == "gitlab.com" || host.ends_with(".gitlab.com") || host.starts_with("gitlab.")
}

fn is_github_host(host: &str) -> bool {
    host == "github.com" || host == "www.github.com"
}

fn detect_on_path<H>(url: &str, is_host: H, re: &Regex) -> MatchResult
where
    H: Fn(&str) -> bool,
{
    let Some(parsed) = parse_web_url(url) else {
        return MatchResult::NoMatch;
    };
    if !is_host(&host_of(&parsed)) {
        return MatchResult::NoMatch;
    }
    match capture(re, parsed.path()) {
        Some(id) => MatchResult::with_identifier(id),
        None => MatchResult::NoMatch,
    }
}

pub fn detect_gitlab_merge_request(url: &str) -> MatchResult {
    detect_on_path(url, is_gitlab_host, &MERGE_REQUEST_PATH)
}

pub fn detect_github_pull_request(url: &str) -> MatchResult {
    detect_on_path(url, is_github_host, &GITHUB_PULL_PATH)
}

pub fn detect_github_issue(url: &str) -> MatchResult {
    detect_on_path(url, is_github_host, &GITHUB_ISSUE_PATH)
}

pub fn detect_gitlab_issue(url: &str) -> MatchResult {
    detect_on_path(url, is_gitlab_host, &GITLAB_ISSUE_PATH)
}

const DETECTORS: &[(Detector, &TypeStyle)] = &[
    (detect_gitlab_merge_request, &MERGE_REQUEST),
    (detect_github_pull_request, &PULL_REQUEST),
    (detect_github_issue, &GITHUB_ISSUE),
    (detect_gitlab_issue, &GITLAB_ISSUE),
];

/// Resolves git hosting URLs, trying detectors in declaration order.
pub fn resolve(url: &str) -> Option<UrlTypeInfo> {
    super::first_match(url, DETECTORS)
}
