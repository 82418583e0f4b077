//! CLI for the focus URL toolkit.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use focus_core::config;

use commands::{
    run_check, run_classify, run_completions, run_equivalent, run_extract_query, run_format,
    run_is_url, run_man, run_normalize, run_open, run_resolvers, run_search,
};

/// Top-level CLI for the focus URL toolkit.
#[derive(Debug, Parser)]
#[command(name = "focus")]
#[command(about = "Unwavering Focus: classify, check and search URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify one or more URLs (type, platform, icon, color, description).
    Classify {
        /// URLs to classify.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Check a URL against the configured distracting domains.
    Check {
        /// URL of the page being loaded.
        url: String,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Report whether the whole text is a link.
    IsUrl {
        /// Saved item text.
        text: String,
    },

    /// Render a URL compactly for display.
    Format { url: String },

    /// Print the normalized form used for de-duplication.
    Normalize { url: String },

    /// Report whether two URLs are equivalent after normalization.
    Equivalent { a: String, b: String },

    /// Build a search URL for a query.
    Search {
        /// Query terms (joined with spaces).
        #[arg(required = true)]
        query: Vec<String>,
        /// Engine name: google, bing, duckduckgo, yahoo (default from config).
        #[arg(long)]
        engine: Option<String>,
    },

    /// Extract the search terms from a search engine result URL.
    ExtractQuery { url: String },

    /// Resolve what opening a saved item does (navigate or search).
    Open {
        /// Saved item text.
        text: String,
        /// Engine name for non-link text (default from config).
        #[arg(long)]
        engine: Option<String>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List classifier families in resolution order.
    Resolvers,

    /// Generate shell completions.
    Completions { shell: Shell },

    /// Generate a man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run()
    }

    pub fn run(self) -> Result<()> {
        match self {
            CliCommand::Classify { urls, json } => run_classify(&urls, json)?,
            CliCommand::Check { url, json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_check(&cfg, &url, json)?;
            }
            CliCommand::IsUrl { text } => run_is_url(&text)?,
            CliCommand::Format { url } => run_format(&url)?,
            CliCommand::Normalize { url } => run_normalize(&url)?,
            CliCommand::Equivalent { a, b } => run_equivalent(&a, &b)?,
            CliCommand::Search { query, engine } => {
                let cfg = config::load_or_init()?;
                run_search(&cfg, &query.join(" "), engine.as_deref())?;
            }
            CliCommand::ExtractQuery { url } => run_extract_query(&url)?,
            CliCommand::Open { text, engine, json } => {
                let cfg = config::load_or_init()?;
                run_open(&cfg, &text, engine.as_deref(), json)?;
            }
            CliCommand::Resolvers => run_resolvers()?,
            CliCommand::Completions { shell } => run_completions(&mut Cli::command(), shell)?,
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
