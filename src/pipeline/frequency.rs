//! Per-article frequency gate.
//!
//! Counting happens over the whole filtered sequence before anything is
//! emitted: a word either passes with every one of its occurrences or is
//! dropped entirely.

use crate::pipeline::tokenize::Token;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// Number of occurrences of each distinct word.
pub fn count_occurrences<'a, I>(words: I) -> HashMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().counts()
}

/// Keep the tokens whose word occurs at least `min_word_frequency` times.
pub fn aggregate(mut tokens: Vec<Token>, min_word_frequency: usize) -> Vec<Token> {
    let qualifying: HashSet<String> = count_occurrences(tokens.iter().map(|t| t.word.as_str()))
        .into_iter()
        .filter(|&(_, count)| count >= min_word_frequency)
        .map(|(word, _)| word.to_owned())
        .collect();
    tokens.retain(|t| qualifying.contains(t.word.as_str()));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, usize)]) -> Vec<Token> {
        pairs
            .iter()
            .map(|&(word, position)| Token {
                word: word.to_string(),
                position,
            })
            .collect()
    }

    #[test]
    fn test_count_occurrences() {
        let counts = count_occurrences(["chat", "chien", "chat"]);
        assert_eq!(counts["chat"], 2);
        assert_eq!(counts["chien"], 1);
    }

    #[test]
    fn test_all_occurrences_of_qualifying_word_pass() {
        let input = tokens(&[("a", 0), ("a", 1), ("a", 2)]);
        let out = aggregate(input.clone(), 2);
        assert_eq!(out, input);
    }

    #[test]
    fn test_gate_is_all_or_nothing() {
        let input = tokens(&[("chat", 1), ("chien", 3), ("chat", 5), ("poisson", 8), ("chien", 9)]);
        let out = aggregate(input, 2);
        let pairs: Vec<(&str, usize)> = out.iter().map(|t| (t.word.as_str(), t.position)).collect();
        assert_eq!(pairs, vec![("chat", 1), ("chien", 3), ("chat", 5), ("chien", 9)]);
    }

    #[test]
    fn test_threshold_one_keeps_everything() {
        let input = tokens(&[("chat", 1), ("mange", 2), ("poisson", 4)]);
        assert_eq!(aggregate(input.clone(), 1), input);
    }

    #[test]
    fn test_threshold_above_every_count() {
        let input = tokens(&[("chat", 0), ("chat", 1)]);
        assert!(aggregate(input, 3).is_empty());
        assert!(aggregate(Vec::new(), 1).is_empty());
    }
}
