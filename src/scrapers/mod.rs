//! News site scrapers, registered at compile time.
//!
//! Every supported site maps to a constructor for a value implementing
//! [`ArticleIndex`], the capability of turning a list page into an ordered
//! list of article URLs. Scraping follows a two-phase pattern:
//!
//! 1. **Indexing**: fetch the site's list page and extract article URLs
//! 2. **Fetching**: download each article page (see [`crate::fetch`])
//!
//! # Supported Sources
//!
//! | Site | List page | Method |
//! |------|-----------|--------|
//! | Le Monde | `/actualite-en-continu/` | [`SelectorIndex`] |
//! | Le Figaro | `/actualite-france` | [`SelectorIndex`] |
//! | Libération | `/politique/` | [`SelectorIndex`] |
//! | franceinfo | `/france/` | [`SelectorIndex`] |

pub mod selector;

pub use selector::SelectorIndex;

/// Produces ordered article URLs from a site's list page.
pub trait ArticleIndex: Send + Sync {
    /// Site key, matching the [`crate::config::SiteConfigResolver`] table.
    fn site(&self) -> &str;

    /// Page listing the latest articles.
    fn list_url(&self) -> &str;

    /// Absolute article URLs found in the list page, in page order, without duplicates.
    fn article_urls(&self, html: &str) -> Vec<String>;
}

type IndexConstructor = fn() -> Box<dyn ArticleIndex>;

const REGISTRY: &[(&str, IndexConstructor)] = &[
    ("lemonde.fr", lemonde),
    ("lefigaro.fr", lefigaro),
    ("liberation.fr", liberation),
    ("francetvinfo.fr", francetvinfo),
];

const LEMONDE: SelectorIndex = SelectorIndex::new(
    "lemonde.fr",
    "https://www.lemonde.fr/actualite-en-continu/",
    "section.teaser a.teaser__link[href]",
);

const LEFIGARO: SelectorIndex = SelectorIndex::new(
    "lefigaro.fr",
    "https://www.lefigaro.fr/actualite-france",
    "article a.fig-ensemble__title-link[href], article h2 a[href]",
);

const LIBERATION: SelectorIndex = SelectorIndex::new(
    "liberation.fr",
    "https://www.liberation.fr/politique/",
    "article a[href]",
);

const FRANCETVINFO: SelectorIndex = SelectorIndex::new(
    "francetvinfo.fr",
    "https://www.francetvinfo.fr/france/",
    "article a[href]",
);

fn lemonde() -> Box<dyn ArticleIndex> {
    Box::new(LEMONDE)
}

fn lefigaro() -> Box<dyn ArticleIndex> {
    Box::new(LEFIGARO)
}

fn liberation() -> Box<dyn ArticleIndex> {
    Box::new(LIBERATION)
}

fn francetvinfo() -> Box<dyn ArticleIndex> {
    Box::new(FRANCETVINFO)
}

/// Site keys with a registered scraper, in registration order.
pub fn registered_sites() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(site, _)| *site)
}

/// Build the scraper registered for `site`.
pub fn lookup(site: &str) -> Option<Box<dyn ArticleIndex>> {
    REGISTRY
        .iter()
        .find(|(key, _)| *key == site)
        .map(|(_, construct)| construct())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfigResolver;
    use scraper::Selector;

    #[test]
    fn test_lookup_known_site() {
        let index = lookup("lemonde.fr").unwrap();
        assert_eq!(index.site(), "lemonde.fr");
        assert!(index.list_url().starts_with("https://www.lemonde.fr/"));
    }

    #[test]
    fn test_lookup_unknown_site() {
        assert!(lookup("unknown.example").is_none());
    }

    #[test]
    fn test_registry_keys_match_constructed_sites() {
        for site in registered_sites() {
            assert_eq!(lookup(site).unwrap().site(), site);
        }
    }

    #[test]
    fn test_registered_sites_have_site_config() {
        let resolver = SiteConfigResolver::builtin();
        for site in registered_sites() {
            assert!(resolver.is_registered(site), "{site} has no site config");
        }
    }

    #[test]
    fn test_registered_selectors_parse() {
        for index in [LEMONDE, LEFIGARO, LIBERATION, FRANCETVINFO] {
            assert!(url::Url::parse(index.list_url()).is_ok(), "{}", index.site());
            assert!(Selector::parse(index.link_selector).is_ok(), "{}", index.site());
        }
    }
}
