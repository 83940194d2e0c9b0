//! CLI probe over `lorewiki_core`.
//!
//! # Responsibility
//! - Exercise seed load, category partitioning, search and link
//!   resolution from a terminal.
//! - Keep output deterministic for quick local sanity checks.

use lorewiki_core::{init_logging, LinkResolveError, WikiConfig, WikiService};
use std::process::ExitCode;

const USAGE: &str = "usage: lorewiki_cli <wiki-root> [categories | search <query> | resolve <label>]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(root) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let config = WikiConfig::new(root);
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Some(log_dir) = log_dir.to_str() {
            if let Err(err) = init_logging(config.log_level.as_str(), log_dir) {
                eprintln!("logging disabled: {err}");
            }
        }
    }

    let wiki = match WikiService::init(&config) {
        Ok(wiki) => wiki,
        Err(err) => {
            eprintln!("load failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    match args.get(1).map(String::as_str) {
        None | Some("categories") => {
            let categorized = wiki.categorized();
            println!("lorewiki_core version={}", lorewiki_core::core_version());
            println!(
                "articles total={} primary={} sections={} auxiliary={}",
                wiki.store().len(),
                categorized.primary.len(),
                categorized.sections.len(),
                categorized.auxiliary.len()
            );
            ExitCode::SUCCESS
        }
        Some("search") => {
            let Some(query) = args.get(2) else {
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            };
            let hits = wiki.search(query);
            println!("hits={}", hits.len());
            for article in hits {
                println!("{}", article.title);
            }
            ExitCode::SUCCESS
        }
        Some("resolve") => {
            let Some(label) = args.get(2) else {
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            };
            match wiki.resolve_link(label) {
                Ok(resolved) => {
                    println!("key={} title={}", resolved.key, resolved.article.title);
                    ExitCode::SUCCESS
                }
                Err(err @ LinkResolveError::NotFound(_)) => {
                    println!("{err}; you can create this article");
                    ExitCode::SUCCESS
                }
            }
        }
        Some(other) => {
            eprintln!("unknown command `{other}`\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}
