//! CSS-selector driven list-page indexing.
//!
//! Most French outlets expose a "latest news" page whose article links share
//! a stable selector. [`SelectorIndex`] pulls those links out of the page,
//! resolves them against the list-page URL and keeps the ones on the same site.

use super::ArticleIndex;
use crate::utils::site_from_url;
use itertools::Itertools;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

/// An [`ArticleIndex`] configured with a list page and a link selector.
#[derive(Debug, Clone)]
pub struct SelectorIndex {
    site: &'static str,
    list_url: &'static str,
    pub(super) link_selector: &'static str,
}

impl SelectorIndex {
    pub const fn new(site: &'static str, list_url: &'static str, link_selector: &'static str) -> Self {
        Self {
            site,
            list_url,
            link_selector,
        }
    }
}

impl ArticleIndex for SelectorIndex {
    fn site(&self) -> &str {
        self.site
    }

    fn list_url(&self) -> &str {
        self.list_url
    }

    fn article_urls(&self, html: &str) -> Vec<String> {
        let base = match Url::parse(self.list_url) {
            Ok(base) => base,
            Err(e) => {
                warn!(site = self.site, list_url = self.list_url, error = %e, "Invalid list URL");
                return Vec::new();
            }
        };
        let selector = match Selector::parse(self.link_selector) {
            Ok(selector) => selector,
            Err(e) => {
                warn!(site = self.site, selector = self.link_selector, error = %e, "Invalid link selector");
                return Vec::new();
            }
        };

        let document = Html::parse_document(html);
        let article_urls: Vec<String> = document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| base.join(href.trim()).ok())
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .filter(|url| site_from_url(url.as_str()).as_deref() == Some(self.site))
            .map(|mut url| {
                url.set_fragment(None);
                url.to_string()
            })
            .filter(|url| url != base.as_str())
            .unique()
            .collect();

        info!(
            count = article_urls.len(),
            site = self.site,
            "Indexed article URLs"
        );
        debug!(urls = ?article_urls, "Article URLs");
        article_urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_PAGE: &str = r##"<html><body>
        <section class="teaser"><a class="teaser__link" href="/politique/article/2025/05/06/reforme.html">Réforme</a></section>
        <section class="teaser"><a class="teaser__link" href="https://www.lemonde.fr/sport/article/2025/05/06/match.html#comments">Match</a></section>
        <section class="teaser"><a class="teaser__link" href="/politique/article/2025/05/06/reforme.html">Doublon</a></section>
        <section class="teaser"><a class="teaser__link" href="https://ads.example.com/promo">Pub</a></section>
        <section class="teaser"><a class="teaser__link" href="mailto:redaction@lemonde.fr">Contact</a></section>
        <a href="/autre/article.html">Hors sélecteur</a>
    </body></html>"##;

    fn index() -> SelectorIndex {
        SelectorIndex::new(
            "lemonde.fr",
            "https://www.lemonde.fr/actualite-en-continu/",
            "section.teaser a.teaser__link[href]",
        )
    }

    #[test]
    fn test_article_urls_are_resolved_deduped_and_ordered() {
        let urls = index().article_urls(LIST_PAGE);
        assert_eq!(
            urls,
            vec![
                "https://www.lemonde.fr/politique/article/2025/05/06/reforme.html",
                "https://www.lemonde.fr/sport/article/2025/05/06/match.html",
            ]
        );
    }

    #[test]
    fn test_empty_page_yields_no_urls() {
        assert!(index().article_urls("").is_empty());
    }

    #[test]
    fn test_invalid_selector_yields_no_urls() {
        let index = SelectorIndex::new("lemonde.fr", "https://www.lemonde.fr/", "a[[");
        assert!(index.article_urls(LIST_PAGE).is_empty());
    }
}
