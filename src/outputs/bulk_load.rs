//! CSV bulk-load file for the vocabulary table.
//!
//! The pipeline emits one event per word occurrence; the storage schema has
//! one row per occurrence with the columns `word, source, date, title,
//! frequency`. The mapping is:
//!
//! | Column | Value |
//! |--------|-------|
//! | `word` | [`WordEvent::word`] |
//! | `source` | site key of the owning article |
//! | `date` | `scraped_at` as a UTC calendar date |
//! | `title` | document title of the owning article |
//! | `frequency` | number of events for this word in the same article |
//!
//! Because the frequency gate is all-or-nothing, `frequency` equals the
//! word's total occurrence count among the article's filtered tokens.

use super::OutputContext;
use crate::models::{ProcessedArticle, WordEvent};
use crate::pipeline::frequency::count_occurrences;
use serde::Serialize;
use std::error::Error;
use std::io;
use tracing::{info, instrument};

const HEADER: [&str; 5] = ["word", "source", "date", "title", "frequency"];

/// One row of the bulk-load file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRow<'a> {
    pub word: &'a str,
    pub source: &'a str,
    pub date: String,
    pub title: &'a str,
    pub frequency: usize,
}

/// Map an article's events to storage rows, in event order.
pub fn storage_rows(processed: &ProcessedArticle) -> Vec<WordRow<'_>> {
    let events = processed.word_events();
    let counts = count_occurrences(events.iter().map(|e| e.word.as_str()));
    events
        .iter()
        .map(|event: &WordEvent| WordRow {
            word: &event.word,
            source: processed.article().site(),
            date: event.scraped_at.date_naive().to_string(),
            title: processed.title(),
            frequency: counts[event.word.as_str()],
        })
        .collect()
}

/// Write the rows of every article to `writer`, header first. Returns the row count.
pub fn write_rows<W: io::Write>(writer: W, articles: &[ProcessedArticle]) -> Result<usize, Box<dyn Error>> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;

    let mut written = 0;
    for processed in articles {
        for row in storage_rows(processed) {
            wtr.serialize(row)?;
            written += 1;
        }
    }
    wtr.flush()?;
    Ok(written)
}

/// Write the run's bulk-load CSV at [`OutputContext::csv_path`].
#[instrument(level = "info", skip_all, fields(path = %ctx.csv_path().display(), articles = articles.len()))]
pub fn write_word_events(ctx: &OutputContext, articles: &[ProcessedArticle]) -> Result<usize, Box<dyn Error>> {
    let file = std::fs::File::create(ctx.csv_path())?;
    let rows = write_rows(file, articles)?;
    info!(rows, "Wrote word events CSV");
    Ok(rows)
}
