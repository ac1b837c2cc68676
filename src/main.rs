//! # Mots Presse
//!
//! Scrapes French news articles and records, for every article, the ordered
//! occurrences of the words worth studying: stopwords removed, length bounded
//! and thresholded by a per-site policy.
//!
//! ## Usage
//!
//! ```sh
//! mots_presse scrape -o ./sortie
//! mots_presse extract --file page.html --site lemonde.fr
//! ```
//!
//! ## Architecture
//!
//! 1. **Indexing**: Discover article URLs from each registered site's list page
//! 2. **Fetching**: Download article pages from discovered URLs
//! 3. **Processing**: Run the vocabulary pipeline on each article
//! 4. **Output**: Write per-article JSON and the word-event bulk-load CSV

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::{Cli, Command, ExtractArgs, ScrapeArgs};
use config::SiteConfigResolver;
use models::{Article, ProcessedArticle};
use outputs::{bulk_load, json, OutputContext};
use utils::{ensure_writable_dir, site_from_url, truncate_for_log};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("mots_presse starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut resolver = SiteConfigResolver::builtin();
    if let Some(path) = &args.sites_config {
        resolver = resolver.load_overrides(path)?;
    }

    match args.command {
        Command::Scrape(scrape_args) => scrape(scrape_args, &resolver).await?,
        Command::Extract(extract_args) => extract(extract_args, &resolver).await?,
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

#[instrument(level = "info", skip_all)]
async fn scrape(args: ScrapeArgs, resolver: &SiteConfigResolver) -> Result<(), Box<dyn Error>> {
    // Early check: ensure output dir is writable
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let ctx = OutputContext::new(&args.output_dir, Utc::now().date_naive());
    info!(run_date = %ctx.run_date(), json_dir = %ctx.json_dir().display(), "Output context ready");
    let client = fetch::build_client(Duration::from_secs(args.timeout_secs))?;

    let sites: Vec<String> = if args.sites.is_empty() {
        scrapers::registered_sites().map(String::from).collect()
    } else {
        args.sites.clone()
    };
    info!(sites = ?sites, limit = args.limit, "Scraping sites");

    let mut processed: Vec<ProcessedArticle> = Vec::new();
    let mut failed_writes = 0usize;

    for site in &sites {
        let Some(index) = scrapers::lookup(site) else {
            warn!(%site, "No scraper registered for site; skipping");
            continue;
        };
        if !resolver.is_registered(site) {
            warn!(%site, "No site config registered; default policy applies");
        }

        let urls = match fetch::index_site(&client, index.as_ref(), args.limit).await {
            Ok(urls) => urls,
            Err(e) => {
                error!(%site, error = %e, "Indexing failed; skipping site");
                continue;
            }
        };

        let articles = fetch::fetch_articles(&client, site, urls, args.concurrency).await;
        for article in articles {
            let result = pipeline::process(article, resolver);
            debug!(
                url = %result.article().url(),
                text_preview = %truncate_for_log(result.extracted_text(), 120),
                "Extracted article text"
            );
            if let Err(e) = json::write_article(&ctx, &result).await {
                error!(url = %result.article().url(), error = %e, "Failed to write article JSON");
                failed_writes += 1;
            }
            processed.push(result);
        }
    }

    let event_count: usize = processed.iter().map(|p| p.word_events().len()).sum();
    info!(
        articles = processed.len(),
        events = event_count,
        failed_writes,
        "Completed article processing"
    );

    let rows = bulk_load::write_word_events(&ctx, &processed)?;
    info!(rows, path = %ctx.csv_path().display(), "Bulk-load file ready");
    Ok(())
}

#[instrument(level = "info", skip_all, fields(file = %args.file.display()))]
async fn extract(args: ExtractArgs, resolver: &SiteConfigResolver) -> Result<(), Box<dyn Error>> {
    let html = tokio::fs::read_to_string(&args.file).await?;
    let url = args
        .url
        .clone()
        .unwrap_or_else(|| format!("file://{}", args.file.display()));
    let site = args
        .site
        .clone()
        .or_else(|| site_from_url(&url))
        .unwrap_or_default();
    if site.is_empty() {
        warn!("No site given or derivable from the URL; default policy applies");
    }

    let result = pipeline::process(Article::new(url, site, html), resolver);
    info!(events = result.word_events().len(), "Processed local article");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
