//! `focus resolvers` – show the classifier's resolution order.

use anyhow::Result;
use focus_core::url_type::RESOLVER_ORDER;

pub fn run_resolvers() -> Result<()> {
    for (i, (family, _)) in RESOLVER_ORDER.iter().enumerate() {
        println!("{:>2}. {}", i + 1, family.as_str());
    }
    println!("{:>2}. other (fallback)", RESOLVER_ORDER.len() + 1);
    Ok(())
}
