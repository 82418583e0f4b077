use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::normalize_domain_entry;
use crate::search::SearchEngine;

/// A configuration value that loads but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("distracting domain entry is empty")]
    EmptyDomain,
    #[error("distracting domain {0:?} must be a bare host name (no scheme, path, or spaces)")]
    InvalidDomain(String),
}

/// Global configuration loaded from `~/.config/focus/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Sites whose landing pages are blocked (subdomains included).
    #[serde(default = "default_distracting_domains")]
    pub distracting_domains: Vec<String>,
    /// Engine used for saved items that are not links.
    #[serde(default)]
    pub search_engine: SearchEngine,
}

fn default_distracting_domains() -> Vec<String> {
    [
        "youtube.com",
        "facebook.com",
        "twitter.com",
        "x.com",
        "instagram.com",
        "reddit.com",
        "tiktok.com",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            distracting_domains: default_distracting_domains(),
            search_engine: SearchEngine::default(),
        }
    }
}

impl FocusConfig {
    /// Checks every distracting domain entry is a bare host name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.distracting_domains {
            let normalized = normalize_domain_entry(entry);
            if normalized.is_empty() {
                return Err(ConfigError::EmptyDomain);
            }
            if normalized.contains("://")
                || normalized.contains('/')
                || normalized.chars().any(char::is_whitespace)
            {
                return Err(ConfigError::InvalidDomain(entry.clone()));
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("focus")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<FocusConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FocusConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

/// Write `cfg` to `path`, creating parent directories.
pub fn write_to(path: &Path, cfg: &FocusConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FocusConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FocusConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}
