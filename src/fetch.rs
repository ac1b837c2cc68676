//! HTTP fetching of list pages and article pages.
//!
//! Fetch failures are logged and the article skipped; there is no retry.

use crate::models::Article;
use crate::scrapers::ArticleIndex;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Build the HTTP client shared by every request of a run.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
}

/// GET `url` and return its body, failing on non-success status codes.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched page");
    Ok(body)
}

/// Fetch a site's list page and return at most `limit` article URLs.
#[instrument(level = "info", skip_all, fields(site = %index.site()))]
pub async fn index_site(
    client: &Client,
    index: &dyn ArticleIndex,
    limit: usize,
) -> Result<Vec<String>, Box<dyn Error>> {
    let html = fetch_html(client, index.list_url()).await?;
    let mut urls = index.article_urls(&html);
    urls.truncate(limit);
    info!(count = urls.len(), limit, "Selected article URLs");
    Ok(urls)
}

/// Fetch article pages concurrently.
///
/// Returns the successfully fetched articles in the order of `urls`.
#[instrument(level = "info", skip_all, fields(%site, urls = urls.len()))]
pub async fn fetch_articles(
    client: &Client,
    site: &str,
    urls: Vec<String>,
    concurrency: usize,
) -> Vec<Article> {
    let mut fetched: Vec<(usize, Article)> = stream::iter(urls.into_iter().enumerate())
        .map(|(i, url)| async move {
            match fetch_html(client, &url).await {
                Ok(html) if html.trim().is_empty() => {
                    warn!(%url, "Article fetch produced no content");
                    Some((i, Article::new(url, site, html)))
                }
                Ok(html) => Some((i, Article::new(url, site, html))),
                Err(e) => {
                    error!(error = %e, %url, "Article fetch failed");
                    None
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .filter_map(std::future::ready)
        .collect()
        .await;

    fetched.sort_by_key(|(i, _)| *i);
    let articles: Vec<Article> = fetched.into_iter().map(|(_, article)| article).collect();
    info!(count = articles.len(), "Fetched article contents");
    articles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_articles_with_no_urls() {
        let client = build_client(Duration::from_secs(1)).unwrap();
        let articles = fetch_articles(&client, "lemonde.fr", Vec::new(), 4).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_html_rejects_invalid_url() {
        let client = build_client(Duration::from_secs(1)).unwrap();
        assert!(fetch_html(&client, "not a url").await.is_err());
    }
}
