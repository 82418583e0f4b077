//! Developer and cloud platforms, plus the generic `/docs/` and `/api/` catch-alls.

use std::sync::LazyLock;

use regex::Regex;

use super::info::{TypeStyle, UrlType, UrlTypeInfo};
use super::matcher::{host_of, on_hosts, parse_web_url, MatchResult};
use super::Detector;

static NPM_PACKAGE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/package/[^/]+").expect("valid regex"));
static DOCKER_IMAGE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:_|r)/[^/]+").expect("valid regex"));
static DOCS_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|/)(?:docs|documentation)(?:/|$)").expect("valid regex"));
static AZURE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|/)azure(?:/|$)").expect("valid regex"));
static API_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|/)api(?:/|$)").expect("valid regex"));

const NPM_PACKAGE: TypeStyle = TypeStyle {
    kind: UrlType::NpmPackage,
    platform: "npm",
    color: "#CB3837",
    icon: "package",
    label: "Package",
};

const DOCKER_HUB: TypeStyle = TypeStyle {
    kind: UrlType::DockerHub,
    platform: "Docker Hub",
    color: "#2496ED",
    icon: "container",
    label: "Image",
};

const KUBERNETES_DOCS: TypeStyle = TypeStyle {
    kind: UrlType::KubernetesDocs,
    platform: "Kubernetes",
    color: "#326CE5",
    icon: "book",
    label: "Kubernetes Docs",
};

const AWS_DOCS: TypeStyle = TypeStyle {
    kind: UrlType::AwsDocs,
    platform: "AWS",
    color: "#FF9900",
    icon: "cloud",
    label: "AWS Docs",
};

const GCP_DOCS: TypeStyle = TypeStyle {
    kind: UrlType::GcpDocs,
    platform: "Google Cloud",
    color: "#4285F4",
    icon: "cloud",
    label: "Google Cloud Docs",
};

const AZURE_DOCS: TypeStyle = TypeStyle {
    kind: UrlType::AzureDocs,
    platform: "Azure",
    color: "#0078D4",
    icon: "cloud",
    label: "Azure Docs",
};

const DOCUMENTATION: TypeStyle = TypeStyle {
    kind: UrlType::Documentation,
    platform: "Docs",
    color: "#6366F1",
    icon: "book",
    label: "Documentation",
};

const API_DOCS: TypeStyle = TypeStyle {
    kind: UrlType::ApiDocs,
    platform: "API",
    color: "#10B981",
    icon: "code",
    label: "API Docs",
};

pub fn detect_npm_package(url: &str) -> MatchResult {
    on_hosts(url, &["npmjs.com"], |parsed, _| {
        MatchResult::from_bool(NPM_PACKAGE_PATH.is_match(parsed.path()))
    })
}

pub fn detect_docker_hub_image(url: &str) -> MatchResult {
    on_hosts(url, &["hub.docker.com"], |parsed, _| {
        MatchResult::from_bool(DOCKER_IMAGE_PATH.is_match(parsed.path()))
    })
}

pub fn detect_kubernetes_docs(url: &str) -> MatchResult {
    on_hosts(url, &["kubernetes.io"], |parsed, _| {
        MatchResult::from_bool(DOCS_SEGMENT.is_match(parsed.path()))
    })
}

pub fn detect_aws_docs(url: &str) -> MatchResult {
    on_hosts(url, &["docs.aws.amazon.com"], |_, _| MatchResult::matched())
}

pub fn detect_gcp_docs(url: &str) -> MatchResult {
    on_hosts(url, &["cloud.google.com"], |parsed, _| {
        MatchResult::from_bool(DOCS_SEGMENT.is_match(parsed.path()))
    })
}

pub fn detect_azure_docs(url: &str) -> MatchResult {
    on_hosts(url, &["learn.microsoft.com", "docs.microsoft.com"], |parsed, _| {
        MatchResult::from_bool(AZURE_SEGMENT.is_match(parsed.path()))
    })
}

/// Any `/docs/` or `/documentation/` path segment, or a `docs.` host.
pub fn detect_documentation(url: &str) -> MatchResult {
    let Some(parsed) = parse_web_url(url) else {
        return MatchResult::NoMatch;
    };
    let host = host_of(&parsed);
    MatchResult::from_bool(host.starts_with("docs.") || DOCS_SEGMENT.is_match(parsed.path()))
}

pub fn detect_api_docs(url: &str) -> MatchResult {
    let Some(parsed) = parse_web_url(url) else {
        return MatchResult::NoMatch;
    };
    MatchResult::from_bool(API_SEGMENT.is_match(parsed.path()))
}

const DETECTORS: &[(Detector, &TypeStyle)] = &[
    (detect_npm_package, &NPM_PACKAGE),
    (detect_docker_hub_image, &DOCKER_HUB),
    (detect_kubernetes_docs, &KUBERNETES_DOCS),
    (detect_aws_docs, &AWS_DOCS),
    (detect_gcp_docs, &GCP_DOCS),
    (detect_azure_docs, &AZURE_DOCS),
    (detect_documentation, &DOCUMENTATION),
    (detect_api_docs, &API_DOCS),
];

pub fn resolve(url: &str) -> Option<UrlTypeInfo> {
    super::first_match(url, DETECTORS)
}
