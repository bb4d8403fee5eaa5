//! Locate a quote on a page and print its highlight rectangles.
//!
//! Reads a page's positioned text as JSON (see `PageText`) and prints the
//! rectangles for the quote as JSON. Exit status 2 means the quote was not found.
//!
//! Usage:
//!   cargo run --bin locate_quote -- page.json "quoted passage"
//!   cargo run --bin locate_quote -- page.json "quoted passage" --scale 2 --relative
//!   cargo run --bin locate_quote -- page.json "quoted passage" --config highlight.json -v

use quote_locator::config::HighlightConfig;
use quote_locator::error::{Error, Result};
use quote_locator::highlight::QuoteHighlighter;
use quote_locator::page::PageText;
use std::fs;
use std::path::PathBuf;

struct Args {
    page_path: PathBuf,
    quote: String,
    config_path: Option<PathBuf>,
    scale: Option<f32>,
    tolerance: Option<f32>,
    relative: bool,
    verbose: bool,
}

impl Args {
    /// Parse command-line arguments, program name excluded.
    ///
    /// Returns `None` when a flag is missing its value, a numeric value does not
    /// parse, or the positional arguments are not exactly a page path and a quote.
    fn parse(args: &[String]) -> Option<Self> {
        let mut positional = Vec::new();
        let mut config_path = None;
        let mut scale = None;
        let mut tolerance = None;
        let mut relative = false;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    i += 1;
                    config_path = Some(PathBuf::from(args.get(i)?));
                },
                "--scale" => {
                    i += 1;
                    scale = Some(args.get(i)?.parse::<f32>().ok()?);
                },
                "--tolerance" => {
                    i += 1;
                    tolerance = Some(args.get(i)?.parse::<f32>().ok()?);
                },
                "--relative" => relative = true,
                "--verbose" | "-v" => verbose = true,
                other => positional.push(other.to_string()),
            }
            i += 1;
        }

        if positional.len() != 2 {
            return None;
        }
        let quote = positional.pop()?;
        let page_path = PathBuf::from(positional.pop()?);

        Some(Self {
            page_path,
            quote,
            config_path,
            scale,
            tolerance,
            relative,
            verbose,
        })
    }

    fn highlight_config(&self) -> Result<HighlightConfig> {
        let mut config = match &self.config_path {
            Some(path) => HighlightConfig::from_json(&fs::read_to_string(path)?)?,
            None => HighlightConfig::default(),
        };
        if let Some(scale) = self.scale {
            config = config.with_scale(scale);
        }
        if let Some(tolerance) = self.tolerance {
            config = config.with_line_tolerance(tolerance);
        }
        Ok(config)
    }
}

/// Returns `false` when the quote is not on the page.
fn run(args: &Args) -> Result<bool> {
    let page = PageText::from_json(&fs::read_to_string(&args.page_path)?)?;
    log::info!(
        "Page {}: {} fragments, viewport {}x{}",
        page.page_number,
        page.fragments.len(),
        page.viewport.width,
        page.viewport.height
    );

    let config = args.highlight_config()?;
    let highlighter = QuoteHighlighter::new(config)?;

    let highlight = match highlighter.highlight_page(&page, &args.quote)? {
        Some(highlight) => highlight,
        None => {
            eprintln!("Source not found on page {}", page.page_number);
            return Ok(false);
        },
    };

    let json = if args.relative {
        let viewport = page.viewport.scaled(config.scale)?;
        let relative: Vec<_> = highlight.rects.iter().map(|r| r.to_relative(&viewport)).collect();
        serde_json::to_string_pretty(&relative)?
    } else {
        serde_json::to_string_pretty(&highlight)?
    };
    println!("{}", json);
    Ok(true)
}

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match Args::parse(&argv) {
        Some(args) => args,
        None => {
            eprintln!(
                "Usage: locate_quote <page.json> <quote> [--config <file>] [--scale <n>] \
                 [--tolerance <n>] [--relative] [--verbose]"
            );
            std::process::exit(1);
        },
    };

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(&args) {
        Ok(true) => {},
        Ok(false) => std::process::exit(2),
        Err(e @ Error::InvalidRange { .. }) => {
            eprintln!("Internal error: {}", e);
            std::process::exit(70);
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    }
}
