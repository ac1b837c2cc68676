use crate::models::{Article, WordEvent};
use crate::pipeline::tokenize::Token;

/// Turn the surviving tokens into word events owned by `article`, in position order.
pub fn build_events(mut tokens: Vec<Token>, article: &Article) -> Vec<WordEvent> {
    tokens.sort_unstable_by_key(|t| t.position);
    tokens
        .into_iter()
        .map(|t| WordEvent {
            word: t.word,
            article_id: article.id(),
            position_in_article: t.position,
            scraped_at: article.scraped_at(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_stamped_and_ordered() {
        let article = Article::new("https://exemple.fr/a", "exemple.fr", "");
        let tokens = vec![
            Token { word: "poisson".into(), position: 4 },
            Token { word: "chat".into(), position: 1 },
        ];

        let events = build_events(tokens, &article);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].word, "chat");
        assert_eq!(events[0].position_in_article, 1);
        assert_eq!(events[1].position_in_article, 4);
        for event in &events {
            assert_eq!(event.article_id, article.id());
            assert_eq!(event.scraped_at, article.scraped_at());
        }
    }
}
