//! # wiktree
//!
//! Outline a saved dictionary page and extract the text under its headings.
//!
//! ## Usage
//!
//! Show the indented outline:
//! ```sh
//! wiktree pain.html
//! ```
//!
//! Show the heading tree:
//! ```sh
//! wiktree --tree pain.html
//! ```
//!
//! Print the text under a heading path:
//! ```sh
//! wiktree -s French/Noun pain.html
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use std::io::Read;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wiktree::tree::{build_json_output, render_box_tree, render_outline};
use wiktree::{Config, HeadingNormalizer, HeadingTree, parser, prune_boilerplate};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    init_tracing(args.verbose);

    let config = match args.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let lang = args.lang.clone().unwrap_or_else(|| config.page.lang.clone());
    let locales = config.locales();
    let table = locales.get(&lang)?;
    let normalizer = HeadingNormalizer::for_table(table);

    let html = read_input(args.file.as_deref())?;
    let mut tree = parser::parse_html(&html, &normalizer, args.build_options(config.build))?;

    if config.page.prune_boilerplate && !args.keep_boilerplate {
        let removed = prune_boilerplate(&mut tree, table);
        info!(removed, lang = %lang, "pruned boilerplate sections");
    }

    if let Some(path) = args.section_path() {
        return print_section(&tree, &path);
    }

    let source = args
        .file
        .as_deref()
        .filter(|p| *p != Path::new("-"))
        .map(|p| p.display().to_string());
    print_tree(&tree, &args, &config, source.as_deref())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read page from stdin")?;
            Ok(buffer)
        }
    }
}

fn print_section(tree: &HeadingTree, path: &[String]) -> Result<()> {
    match tree.text_at(path)? {
        Some(text) => {
            println!("{}", text);
            Ok(())
        }
        None => Err(eyre!("Section '{}' has no text", path.join("/"))),
    }
}

fn print_tree(
    tree: &HeadingTree,
    args: &Cli,
    config: &Config,
    source: Option<&str>,
) -> Result<()> {
    match args.output_format() {
        OutputFormat::Plain => print!("{}", render_outline(tree, config.output.indent)),
        OutputFormat::Tree => print!("{}", render_box_tree(tree)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&build_json_output(tree, source))?;
            println!("{}", json);
        }
    }
    Ok(())
}
