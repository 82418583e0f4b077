//! `focus search` and `focus extract-query`.

use anyhow::{bail, Result};
use focus_core::config::FocusConfig;
use focus_core::search::{self, SearchEngine};

/// Engine from `--engine`, or the configured default.
pub(super) fn pick_engine(cfg: &FocusConfig, name: Option<&str>) -> Result<SearchEngine> {
    match name {
        Some(n) => Ok(n.parse::<SearchEngine>()?),
        None => Ok(cfg.search_engine),
    }
}

pub fn run_search(cfg: &FocusConfig, query: &str, engine: Option<&str>) -> Result<()> {
    if query.trim().is_empty() {
        bail!("search query is empty");
    }
    let engine = pick_engine(cfg, engine)?;
    println!("{}", search::get_search_url(query, engine.as_str()));
    Ok(())
}

pub fn run_extract_query(url: &str) -> Result<()> {
    match search::extract_search_query(url) {
        Some(q) => println!("{q}"),
        None => bail!("not a search engine result URL: {url}"),
    }
    Ok(())
}
