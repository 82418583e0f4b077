//! `focus classify` – classify URLs.

use anyhow::Result;
use focus_core::url_type::detect_url_type;

pub fn run_classify(urls: &[String], json: bool) -> Result<()> {
    let infos: Vec<_> = urls.iter().map(|u| detect_url_type(u)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!(
        "{:<22} {:<14} {:<9} {:<28} {}",
        "TYPE", "PLATFORM", "COLOR", "DESCRIPTION", "URL"
    );
    for (url, info) in urls.iter().zip(&infos) {
        println!(
            "{:<22} {:<14} {:<9} {:<28} {}",
            info.kind.as_str(),
            info.platform,
            info.color,
            info.description,
            url
        );
    }
    Ok(())
}
