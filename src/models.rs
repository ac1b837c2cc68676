//! Data models for scraped articles and their vocabulary telemetry.
//!
//! This module defines the records that flow through the application:
//! - [`Article`]: Raw fetched article as handed over by the fetcher
//! - [`ProcessedArticle`]: An article together with its derived text and events
//! - [`WordEvent`]: One record per qualifying word occurrence
//!
//! Derived data lives on [`ProcessedArticle`] rather than on [`Article`] so
//! it is computed exactly once, when the pipeline consumes the raw article.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A raw news article as fetched from a news site.
///
/// All fields are fixed at construction. `id` and `scraped_at` are assigned
/// by [`Article::new`] and copied onto every [`WordEvent`] derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    id: Uuid,
    url: String,
    site: String,
    #[serde(skip_serializing)]
    raw_html: String,
    scraped_at: DateTime<Utc>,
}

impl Article {
    /// Create an article with a fresh identifier, stamped with the current time.
    pub fn new(url: impl Into<String>, site: impl Into<String>, raw_html: impl Into<String>) -> Self {
        Self::with_identity(Uuid::new_v4(), url, site, raw_html, Utc::now())
    }

    /// Create an article with an explicit identifier and scrape timestamp.
    ///
    /// Used when reloading previously scraped pages, where the identity must
    /// be kept stable across runs.
    pub fn with_identity(
        id: Uuid,
        url: impl Into<String>,
        site: impl Into<String>,
        raw_html: impl Into<String>,
        scraped_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url: url.into(),
            site: site.into(),
            raw_html: raw_html.into(),
            scraped_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Site key (bare domain such as `lemonde.fr`) used to resolve the processing policy.
    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn raw_html(&self) -> &str {
        &self.raw_html
    }

    pub fn scraped_at(&self) -> DateTime<Utc> {
        self.scraped_at
    }
}

/// One qualifying occurrence of a word inside an article.
///
/// `position_in_article` indexes the occurrence among *all* tokens of the
/// article text, so positions of emitted events usually have gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEvent {
    /// Canonical (lowercased) word.
    pub word: String,
    /// Identifier of the owning [`Article`].
    pub article_id: Uuid,
    /// Zero-based token index of this occurrence.
    pub position_in_article: usize,
    /// Scrape time of the owning article.
    pub scraped_at: DateTime<Utc>,
}

/// An article after it went through the vocabulary pipeline.
///
/// Only the pipeline constructs this type; the derived fields are read-only.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedArticle {
    #[serde(flatten)]
    article: Article,
    title: String,
    extracted_text: String,
    word_events: Vec<WordEvent>,
}

impl ProcessedArticle {
    pub(crate) fn new(
        article: Article,
        title: String,
        extracted_text: String,
        word_events: Vec<WordEvent>,
    ) -> Self {
        Self {
            article,
            title,
            extracted_text,
            word_events,
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Text of the document's `<title>`, empty when absent.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    /// Events in strictly increasing `position_in_article` order.
    pub fn word_events(&self) -> &[WordEvent] {
        &self.word_events
    }
}
