//! Command-line interface definitions for Mots Presse.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Most options can also be provided via environment variables (a `.env`
//! file is loaded at startup).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the Mots Presse application.
///
/// # Examples
///
/// ```sh
/// # Scrape every registered site
/// mots_presse scrape -o ./sortie
///
/// # Scrape two sites, ten articles each, with custom site policies
/// mots_presse --sites-config sites.yaml scrape -o ./sortie -s lemonde.fr -s liberation.fr -l 10
///
/// # Process a saved page offline
/// mots_presse extract --file page.html --url https://www.lemonde.fr/a.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional YAML file overriding per-site vocabulary policies
    #[arg(long, env = "MOTS_SITES_CONFIG", global = true)]
    pub sites_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the latest articles of registered sites and record their vocabulary
    Scrape(ScrapeArgs),
    /// Process a local HTML file and print the result as JSON
    Extract(ExtractArgs),
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Output directory for JSON and CSV files
    #[arg(short, long, env = "MOTS_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Site to scrape (repeatable); defaults to every registered site
    #[arg(short, long = "site")]
    pub sites: Vec<String>,

    /// Maximum number of articles per site
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Number of article pages fetched at once
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// HTTP request timeout in seconds
    #[arg(long, env = "MOTS_HTTP_TIMEOUT_SECS", default_value_t = 20)]
    pub timeout_secs: u64,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// HTML file to process
    #[arg(short, long)]
    pub file: PathBuf,

    /// Site key selecting the vocabulary policy; derived from --url when omitted
    #[arg(short, long)]
    pub site: Option<String>,

    /// Original URL of the page
    #[arg(short, long)]
    pub url: Option<String>,
}
