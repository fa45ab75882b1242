use crate::config::PageConfig;
use crate::errors::FragmentError;
use crate::fragment::{decode_fragment, encode_fragment, FRAGMENT_TAG};
use crate::structs::{render_search_controls, PostEntry};
use log::{debug, info};
use parser::{ast::Filter, parser::parse_query};
use retrieval::apply_filters;

/// The archive page: its entries, the search bar and the location fragment
/// the current query is kept in.
///
/// Events are handled one at a time, each runs to completion.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    config: PageConfig,
    entries: Vec<PostEntry>,
    search_text: String,
    fragment: String, // without the leading '#'
}

impl SearchPage {
    pub fn new(config: PageConfig, entries: Vec<PostEntry>) -> Self {
        SearchPage {
            config,
            entries,
            search_text: String::default(),
            fragment: String::default(),
        }
    }

    /// Sets the fragment the page is opened with, before [`SearchPage::on_load`].
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.fragment = fragment.strip_prefix(FRAGMENT_TAG).unwrap_or(fragment).to_string();
        self
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn entries(&self) -> &[PostEntry] {
        &self.entries
    }

    pub fn push_post<I, S>(&mut self, title: &str, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = PostEntry::new(title, categories, &self.config.category_separator);
        self.entries.push(entry);
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &PostEntry> {
        self.entries.iter().filter(|e| e.is_visible())
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Typing into the search bar; nothing is applied until submit.
    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// External navigation to a new fragment. Like a browser, only an actual
    /// change fires the fragment change handler.
    pub fn set_fragment(&mut self, fragment: &str) -> Result<(), FragmentError> {
        let fragment = fragment.strip_prefix(FRAGMENT_TAG).unwrap_or(fragment);
        if fragment == self.fragment {
            debug!("Fragment unchanged, nothing to do");
            return Ok(());
        }

        self.fragment = fragment.to_string();
        self.on_hash_change()
    }

    // Page load: a stored query is restored into the search bar and applied
    pub fn on_load(&mut self) -> Result<(), FragmentError> {
        let query = decode_fragment(&self.fragment)?;

        if !query.is_empty() {
            info!("Restoring query from fragment: {:?}", query);
            self.search_text = query.clone();
            self.run_query(&query);
        }

        Ok(())
    }

    // Submit only stores the query, applying it is left to the fragment change
    pub fn on_submit(&mut self) -> Result<(), FragmentError> {
        let encoded = encode_fragment(&self.search_text);
        self.set_fragment(&encoded)
    }

    pub fn on_hash_change(&mut self) -> Result<(), FragmentError> {
        let query = decode_fragment(&self.fragment)?;

        self.search_text = query.clone();
        self.run_query(&query);

        Ok(())
    }

    pub fn run_query(&mut self, query: &str) -> Vec<Filter> {
        let filters = parse_query(query);
        apply_filters(&filters, &mut self.entries);
        filters
    }

    pub fn render_controls(&self) -> String {
        render_search_controls(&self.config, &self.search_text)
    }

    pub fn render_entries(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.render_attributes(&self.config))
            .collect()
    }
}
