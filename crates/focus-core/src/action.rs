//! What clicking a saved item does: open it if it is a link, search for it otherwise.

use serde::Serialize;

use crate::search::SearchEngine;
use crate::url_model::is_url;
use crate::url_type::{detect_url_type, UrlTypeInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum SavedItemAction {
    /// The item is a link; `info` drives its icon, color and button.
    Navigate { url: String, info: UrlTypeInfo },
    /// The item is free text; `url` is the search to open.
    Search { query: String, url: String },
}

impl SavedItemAction {
    /// Resolves the action for saved `text`. Blank text has no action.
    pub fn resolve(text: &str, engine: SearchEngine) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if is_url(trimmed) {
            return Some(SavedItemAction::Navigate {
                url: trimmed.to_string(),
                info: detect_url_type(trimmed),
            });
        }
        Some(SavedItemAction::Search {
            query: trimmed.to_string(),
            url: engine.search_url(trimmed),
        })
    }

    /// URL to open for this action.
    pub fn target_url(&self) -> &str {
        match self {
            SavedItemAction::Navigate { url, .. } | SavedItemAction::Search { url, .. } => url,
        }
    }
}
