use std::env;

pub const DEFAULT_ENTRY_CLASS: &str = "post-entry";
pub const DEFAULT_TITLE_ATTR: &str = "data-title";
pub const DEFAULT_CATEGORIES_ATTR: &str = "data-categories";
pub const DEFAULT_SEARCH_FIELD_ID: &str = "search-text";
pub const DEFAULT_SEARCH_SUBMIT_ID: &str = "search-submit";
pub const DEFAULT_CATEGORY_SEPARATOR: &str = ",";

/// Names shared between the archive page markup and the search script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub entry_class: String,
    pub title_attr: String,
    pub categories_attr: String,
    pub search_field_id: String,
    pub search_submit_id: String,
    pub category_separator: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            entry_class: DEFAULT_ENTRY_CLASS.to_string(),
            title_attr: DEFAULT_TITLE_ATTR.to_string(),
            categories_attr: DEFAULT_CATEGORIES_ATTR.to_string(),
            search_field_id: DEFAULT_SEARCH_FIELD_ID.to_string(),
            search_submit_id: DEFAULT_SEARCH_SUBMIT_ID.to_string(),
            category_separator: DEFAULT_CATEGORY_SEPARATOR.to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_env() -> Self {
        PageConfig {
            entry_class: env::var("ENTRY_CLASS").unwrap_or(DEFAULT_ENTRY_CLASS.to_string()),
            title_attr: env::var("TITLE_ATTR").unwrap_or(DEFAULT_TITLE_ATTR.to_string()),
            categories_attr: env::var("CATEGORIES_ATTR")
                .unwrap_or(DEFAULT_CATEGORIES_ATTR.to_string()),
            search_field_id: env::var("SEARCH_FIELD_ID")
                .unwrap_or(DEFAULT_SEARCH_FIELD_ID.to_string()),
            search_submit_id: env::var("SEARCH_SUBMIT_ID")
                .unwrap_or(DEFAULT_SEARCH_SUBMIT_ID.to_string()),
            category_separator: env::var("CATEGORY_SEPARATOR")
                .unwrap_or(DEFAULT_CATEGORY_SEPARATOR.to_string()),
        }
    }
}
