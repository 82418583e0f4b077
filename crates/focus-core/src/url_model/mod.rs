//! Link text handling for saved items.
//!
//! Decides whether a saved string is itself a link, normalizes links for
//! de-duplication, and renders them compactly for display.

mod display;
mod link;
mod normalize;

pub use display::format_url_for_display;
pub use link::is_url;
pub use normalize::{are_urls_equivalent, normalize_url};
