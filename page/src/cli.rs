use clap::Parser;

/// Preview which archive entries a search query leaves visible.
///
/// Entries are read from stdin, one `title<TAB>cat1,cat2` per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Query terms, e.g. `rust "async io" -category:drafts`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

impl Args {
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}
