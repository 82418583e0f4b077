//! `focus open` – resolve what clicking a saved item does.

use anyhow::{bail, Result};
use focus_core::action::SavedItemAction;
use focus_core::config::FocusConfig;

use super::search::pick_engine;

pub fn run_open(cfg: &FocusConfig, text: &str, engine: Option<&str>, json: bool) -> Result<()> {
    let engine = pick_engine(cfg, engine)?;
    let Some(action) = SavedItemAction::resolve(text, engine) else {
        bail!("saved item text is empty");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&action)?);
        return Ok(());
    }

    let target = action.target_url();
    match &action {
        SavedItemAction::Navigate { info, .. } => {
            println!("navigate {} ({}: {})", target, info.platform, info.description);
        }
        SavedItemAction::Search { query, .. } => {
            println!("search {:?} via {}", query, target);
        }
    }
    Ok(())
}
