//! Vocabulary extraction pipeline.
//!
//! Turns a fetched [`Article`] into a [`ProcessedArticle`] carrying the
//! normalized body text and the ordered word events. Every stage is a pure
//! function of its inputs, so articles can be processed in any order or in
//! parallel and re-running on the same input gives the same output.
//!
//! # Stages
//!
//! 1. [`normalize`]: HTML → plain text
//! 2. [`tokenize`]: text → `(word, position)` tokens
//! 3. [`stopwords`]: drop stopwords and out-of-bounds lengths
//! 4. [`frequency`]: count, then keep words reaching the site threshold
//! 5. [`events`]: stamp survivors with the article identity

pub mod events;
pub mod frequency;
pub mod normalize;
pub mod stopwords;
pub mod tokenize;

use crate::config::{SiteConfig, SiteConfigResolver};
use crate::models::{Article, ProcessedArticle};
use stopwords::StopwordFilter;
use tracing::{debug, instrument};

/// Run the pipeline with the policy resolved for the article's site.
pub fn process(article: Article, resolver: &SiteConfigResolver) -> ProcessedArticle {
    let config = resolver.resolve(article.site());
    process_with_config(article, config)
}

/// Run the pipeline with an explicit policy.
#[instrument(level = "debug", skip_all, fields(url = %article.url(), site = %article.site()))]
pub fn process_with_config(article: Article, config: &SiteConfig) -> ProcessedArticle {
    let normalize::PageText {
        title,
        text: extracted_text,
    } = normalize::normalize(article.raw_html());

    let tokens = tokenize::tokenize(&extracted_text);
    let token_count = tokens.len();

    let filtered = StopwordFilter::new(config).filter(tokens);
    let filtered_count = filtered.len();

    let aggregated = frequency::aggregate(filtered, config.min_word_frequency());
    let word_events = events::build_events(aggregated, &article);

    debug!(
        text_chars = extracted_text.chars().count(),
        tokens = token_count,
        filtered = filtered_count,
        events = word_events.len(),
        "Processed article"
    );

    ProcessedArticle::new(article, title, extracted_text, word_events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordEvent;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use uuid::Uuid;

    const SAMPLE_HTML: &str = r#"<!doctype html>
<html lang="fr">
<head><title>Réforme des retraites</title><script>window.tracker = "le le le";</script></head>
<body>
  <h1>La réforme des retraites divise le gouvernement</h1>
  <p>Le gouvernement présente une réforme. Les syndicats rejettent la réforme,
     et le gouvernement maintient son calendrier.</p>
  <p>Aujourd’hui, les syndicats appellent à la grève : 2025 sera une année de grève ?</p>
  <style>.x { color: blue }</style>
</body>
</html>"#;

    fn article(html: &str, site: &str) -> Article {
        Article::with_identity(
            Uuid::nil(),
            format!("https://www.{site}/article"),
            site,
            html,
            Utc.with_ymd_and_hms(2025, 5, 6, 7, 30, 0).unwrap(),
        )
    }

    fn words(events: &[WordEvent]) -> Vec<&str> {
        events.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let processed = process(article("", "lemonde.fr"), &SiteConfigResolver::builtin());
        assert_eq!(processed.extracted_text(), "");
        assert!(processed.word_events().is_empty());
        assert_eq!(processed.title(), "");
    }

    #[test]
    fn test_scenario_repeated_short_word() {
        let config = SiteConfig::new(Vec::<String>::new(), 2, 1, 10).unwrap();
        let processed = process_with_config(article("a a a", "exemple.fr"), &config);
        let pairs: Vec<(&str, usize)> = processed
            .word_events()
            .iter()
            .map(|e| (e.word.as_str(), e.position_in_article))
            .collect();
        assert_eq!(pairs, vec![("a", 0), ("a", 1), ("a", 2)]);
    }

    #[test]
    fn test_scenario_default_stopwords() {
        let processed = process_with_config(
            article("le chat mange le poisson", "exemple.fr"),
            &SiteConfig::default(),
        );
        assert_eq!(words(processed.word_events()), vec!["chat", "mange", "poisson"]);
        let positions: Vec<usize> = processed.word_events().iter().map(|e| e.position_in_article).collect();
        assert_eq!(positions, vec![1, 2, 4]);
    }

    #[test]
    fn test_unknown_site_matches_explicit_default() {
        let resolver = SiteConfigResolver::builtin();
        let via_resolver = process(article(SAMPLE_HTML, "unknown.example"), &resolver);
        let explicit = process_with_config(article(SAMPLE_HTML, "unknown.example"), &SiteConfig::default());
        assert_eq!(via_resolver.word_events(), explicit.word_events());
        assert_eq!(via_resolver.extracted_text(), explicit.extracted_text());
    }

    #[test]
    fn test_idempotent_output() {
        let resolver = SiteConfigResolver::builtin();
        let first = process(article(SAMPLE_HTML, "lemonde.fr"), &resolver);
        let second = process(article(SAMPLE_HTML, "lemonde.fr"), &resolver);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_invariants_hold_on_sample() {
        let resolver = SiteConfigResolver::builtin();
        for site in ["lemonde.fr", "liberation.fr", "unknown.example"] {
            let config = resolver.resolve(site);
            let processed = process(article(SAMPLE_HTML, site), &resolver);
            let events = processed.word_events();
            let filter = StopwordFilter::new(config);

            // strictly increasing positions
            assert!(events.windows(2).all(|w| w[0].position_in_article < w[1].position_in_article));

            for event in events {
                let len = tokenize::word_len(&event.word);
                assert!(len >= config.min_word_length() && len <= config.max_word_length());
                assert!(!filter.is_stopword(&event.word));
            }

            // all-or-nothing: emitted count equals filtered count, or zero
            let filtered = filter.filter(tokenize::tokenize(processed.extracted_text()));
            let filtered_counts = frequency::count_occurrences(filtered.iter().map(|t| t.word.as_str()));
            let emitted_counts: HashMap<&str, usize> =
                frequency::count_occurrences(events.iter().map(|e| e.word.as_str()));
            for (word, total) in filtered_counts {
                let emitted = emitted_counts.get(word).copied().unwrap_or(0);
                assert!(emitted == 0 || emitted == total, "{word}: {emitted} of {total}");
                assert_eq!(emitted > 0, total >= config.min_word_frequency());
            }
        }
    }

    #[test]
    fn test_site_threshold_on_sample() {
        let processed = process(article(SAMPLE_HTML, "lemonde.fr"), &SiteConfigResolver::builtin());
        let emitted = words(processed.word_events());
        // lemonde.fr requires two occurrences
        assert_eq!(emitted.iter().filter(|w| **w == "réforme").count(), 3);
        assert_eq!(emitted.iter().filter(|w| **w == "gouvernement").count(), 3);
        assert_eq!(emitted.iter().filter(|w| **w == "grève").count(), 2);
        assert!(!emitted.contains(&"calendrier"));
        assert!(!emitted.contains(&"tracker"));
        assert!(!emitted.contains(&"color"));
        assert_eq!(processed.title(), "Réforme des retraites");
    }

    #[test]
    fn test_inline_markup_keeps_words_whole() {
        let html = r#"<p>La <b>grè</b>ve et l'<em>Élysée</em> : <span class="lettrine">G</span>ouvernement</p>"#;
        let processed = process_with_config(article(html, "exemple.fr"), &SiteConfig::default());
        assert_eq!(
            words(processed.word_events()),
            vec!["grève", "l'élysée", "gouvernement"]
        );
    }

    #[test]
    fn test_composed_and_decomposed_spellings_count_together() {
        let config = SiteConfig::new(Vec::<String>::new(), 2, 3, 25).unwrap();
        let html = "<p>été e\u{301}te\u{301} cafe\u{301} café thé</p>";
        let processed = process_with_config(article(html, "exemple.fr"), &config);
        let pairs: Vec<(&str, usize)> = processed
            .word_events()
            .iter()
            .map(|e| (e.word.as_str(), e.position_in_article))
            .collect();
        assert_eq!(pairs, vec![("café", 2), ("café", 3)]);
    }

    #[test]
    fn test_events_reference_article() {
        let a = article("<p>bonjour bonjour</p>", "exemple.fr");
        let id = a.id();
        let at = a.scraped_at();
        let processed = process_with_config(a, &SiteConfig::default());
        assert_eq!(processed.word_events().len(), 2);
        assert!(processed.word_events().iter().all(|e| e.article_id == id && e.scraped_at == at));
    }
}
