//! `focus check` – distraction-blocking decision for one page load.

use anyhow::Result;
use focus_core::config::FocusConfig;
use focus_core::domain::get_domain_info;

pub fn run_check(cfg: &FocusConfig, url: &str, json: bool) -> Result<()> {
    let info = get_domain_info(url, &cfg.distracting_domains);
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let domain = if info.domain.is_empty() {
        "-"
    } else {
        info.domain.as_str()
    };
    println!("domain:           {domain}");
    println!("homepage:         {}", info.is_homepage);
    println!("specific content: {}", info.is_specific_content);
    println!("distracting:      {}", info.is_distracting);
    println!("redirect:         {}", info.should_redirect);
    Ok(())
}
