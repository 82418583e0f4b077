pub mod config;
pub mod logging;

pub mod action;
pub mod domain;
pub mod search;
pub mod url_model;
pub mod url_type;

pub use action::SavedItemAction;
pub use domain::{
    extract_domain, get_domain_info, is_distracting_domain, is_homepage, is_specific_content,
    should_redirect, DomainInfo,
};
pub use search::{extract_search_query, get_search_url, is_search_engine_result, SearchEngine};
pub use url_model::{are_urls_equivalent, format_url_for_display, is_url, normalize_url};
pub use url_type::{detect_url_type, UrlType, UrlTypeInfo};
