use crate::config::PageConfig;
use itertools::Itertools;
use retrieval::{Candidate, Toggle};
use std::fmt::{self, Display};

/// The `display` style of an archive entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    Block,
    None,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        DisplayStyle::Block
    }
}

impl DisplayStyle {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            DisplayStyle::Block
        } else {
            DisplayStyle::None
        }
    }

    pub fn is_visible(&self) -> bool {
        *self == DisplayStyle::Block
    }
}

impl Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DisplayStyle::Block => write!(f, "block"),
            DisplayStyle::None => write!(f, "none"),
        }
    }
}

/// Represents a single post in the archive listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEntry {
    title: String,
    categories: String,
    display: DisplayStyle,
}

impl PostEntry {
    /// Builds an entry the way the archive page renders posts: the title and
    /// every category lowercased, categories joined with `separator`.
    pub fn new<I, S>(title: &str, categories: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PostEntry {
            title: title.to_lowercase(),
            categories: categories
                .into_iter()
                .map(|c| c.as_ref().to_lowercase())
                .join(separator),
            display: DisplayStyle::default(),
        }
    }

    /// Takes attribute values exactly as found on the page.
    pub fn with_attributes(title: &str, categories: &str) -> Self {
        PostEntry {
            title: title.to_string(),
            categories: categories.to_string(),
            display: DisplayStyle::default(),
        }
    }

    pub fn display(&self) -> DisplayStyle {
        self.display
    }

    pub fn is_visible(&self) -> bool {
        self.display.is_visible()
    }

    pub fn render_attributes(&self, config: &PageConfig) -> String {
        format!(
            "class=\"{}\" {}=\"{}\" {}=\"{}\" style=\"display: {}\"",
            escape_attribute(&config.entry_class),
            config.title_attr,
            escape_attribute(&self.title),
            config.categories_attr,
            escape_attribute(&self.categories),
            self.display
        )
    }
}

impl Candidate for PostEntry {
    fn title(&self) -> &str {
        &self.title
    }

    fn categories(&self) -> &str {
        &self.categories
    }
}

impl Toggle for PostEntry {
    fn set_visible(&mut self, visible: bool) {
        self.display = DisplayStyle::from_visible(visible);
    }
}

pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }

    out
}

pub const ENTRY_FIELD_SEPARATOR: char = '\t';
pub const ENTRY_LIST_SEPARATOR: char = ',';

/// Parses a `title<TAB>cat1,cat2` line. Categories are trimmed and empty ones
/// dropped; a line without a tab has no categories. Blank lines yield `None`.
pub fn parse_entry_line(line: &str) -> Option<(&str, Vec<&str>)> {
    if line.trim().is_empty() {
        return None;
    }

    let (title, categories) = line
        .split_once(ENTRY_FIELD_SEPARATOR)
        .unwrap_or((line, ""));
    let categories = categories
        .split(ENTRY_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    Some((title, categories))
}

/// Markup for the search bar and its submit button
pub fn render_search_controls(config: &PageConfig, value: &str) -> String {
    format!(
        "<input type=\"text\" id=\"{}\" value=\"{}\"><button id=\"{}\">Search</button>",
        escape_attribute(&config.search_field_id),
        escape_attribute(value),
        escape_attribute(&config.search_submit_id)
    )
}
