//! Tests for link helpers, search, open, resolvers, completions and man.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_is_url() {
    match parse(&["focus", "is-url", "check out https://x.com"]) {
        CliCommand::IsUrl { text } => assert_eq!(text, "check out https://x.com"),
        _ => panic!("expected IsUrl"),
    }
}

#[test]
fn cli_parse_equivalent() {
    match parse(&["focus", "equivalent", "https://a.com/", "https://a.com"]) {
        CliCommand::Equivalent { a, b } => {
            assert_eq!(a, "https://a.com/");
            assert_eq!(b, "https://a.com");
        }
        _ => panic!("expected Equivalent"),
    }
}

#[test]
fn cli_parse_search_joins_terms() {
    match parse(&["focus", "search", "rust", "ownership", "--engine", "bing"]) {
        CliCommand::Search { query, engine } => {
            assert_eq!(query.join(" "), "rust ownership");
            assert_eq!(engine.as_deref(), Some("bing"));
        }
        _ => panic!("expected Search"),
    }
}

#[test]
fn cli_parse_search_default_engine() {
    match parse(&["focus", "search", "rust"]) {
        CliCommand::Search { engine, .. } => assert!(engine.is_none()),
        _ => panic!("expected Search"),
    }
}

#[test]
fn cli_parse_extract_query() {
    match parse(&["focus", "extract-query", "https://www.bing.com/search?q=x"]) {
        CliCommand::ExtractQuery { url } => assert_eq!(url, "https://www.bing.com/search?q=x"),
        _ => panic!("expected ExtractQuery"),
    }
}

#[test]
fn cli_parse_open() {
    match parse(&["focus", "open", "rust borrow checker", "--engine", "ddg", "--json"]) {
        CliCommand::Open { text, engine, json } => {
            assert_eq!(text, "rust borrow checker");
            assert_eq!(engine.as_deref(), Some("ddg"));
            assert!(json);
        }
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_resolvers() {
    match parse(&["focus", "resolvers"]) {
        CliCommand::Resolvers => {}
        _ => panic!("expected Resolvers"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["focus", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["focus", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn extract_query_fails_for_foreign_url() {
    let cmd = parse(&["focus", "extract-query", "https://example.com/?q=x"]);
    assert!(cmd.run().is_err());
}
