use archive_lib::{encode_fragment, parse_entry_line, Args, PageConfig, SearchPage};
use clap::Parser;
use log::info;
use retrieval::Candidate;
use std::io::{self, BufRead};

fn main() -> std::io::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let query = args.query();

    let config = PageConfig::from_env();
    info!("Using page config: {:?}", config);

    let mut page = SearchPage::new(config, Vec::default());

    for line in io::stdin().lock().lines() {
        let line = line?;
        if let Some((title, categories)) = parse_entry_line(&line) {
            page.push_post(title, categories);
        }
    }
    info!("Read {} entries", page.entries().len());

    page.set_search_text(&query);
    page.on_submit()?;

    println!("#{}", encode_fragment(&query));
    for entry in page.visible_entries() {
        println!("{}", entry.title());
    }

    Ok(())
}
