//! `focus is-url`, `format`, `normalize`, `equivalent` – saved link text helpers.

use anyhow::Result;
use focus_core::url_model;

pub fn run_is_url(text: &str) -> Result<()> {
    println!("{}", url_model::is_url(text));
    Ok(())
}

pub fn run_format(url: &str) -> Result<()> {
    println!("{}", url_model::format_url_for_display(url));
    Ok(())
}

pub fn run_normalize(url: &str) -> Result<()> {
    println!("{}", url_model::normalize_url(url));
    Ok(())
}

pub fn run_equivalent(a: &str, b: &str) -> Result<()> {
    println!("{}", url_model::are_urls_equivalent(a, b));
    Ok(())
}
