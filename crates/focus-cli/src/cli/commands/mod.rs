//! CLI command handlers. Each command is in its own file.

mod check;
mod classify;
mod completions;
mod link;
mod open;
mod resolvers;
mod search;

pub use check::run_check;
pub use classify::run_classify;
pub use completions::{run_completions, run_man};
pub use link::{run_equivalent, run_format, run_is_url, run_normalize};
pub use open::run_open;
pub use resolvers::run_resolvers;
pub use search::{run_extract_query, run_search};
