//! JSON output of processed articles.
//!
//! Each article is written to `{json_dir}/{article_id}.json`, where
//! `json_dir` is the date directory of the run (see [`OutputContext`]).
//! The raw HTML is not part of the document; the extracted text is.

use super::OutputContext;
use crate::models::ProcessedArticle;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write one [`ProcessedArticle`] as JSON and return the file path.
#[instrument(level = "info", skip_all, fields(article_id = %processed.article().id()))]
pub async fn write_article(
    ctx: &OutputContext,
    processed: &ProcessedArticle,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(processed)?;

    if let Err(e) = fs::create_dir_all(ctx.json_dir()).await {
        error!(dir = %ctx.json_dir().display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = ctx.article_json_path(processed.article().id());
    fs::write(&path, json).await?;
    info!(path = %path.display(), events = processed.word_events().len(), "Wrote article JSON");

    Ok(path)
}
