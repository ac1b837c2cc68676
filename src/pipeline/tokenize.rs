//! Word tokenization for French article text.
//!
//! A token is a maximal run of Latin-script letters (accented letters and
//! combining marks included) that may contain internal apostrophes or
//! hyphens, so `aujourd'hui` and `peut-être` stay whole. Digits, punctuation,
//! symbols, emoji and letters of other scripts only ever separate tokens.
//!
//! # Canonical form
//!
//! Tokens are brought to NFC, so a letter followed by a combining accent and
//! its precomposed form are the same word, then lowercased. The typographic
//! apostrophe `’` folds to `'`, and the Unicode hyphens `‐` and `‑`
//! (non-breaking) fold to `-`. Accents are kept: `élève` and `eleve` are
//! different words.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[\p{L}&&\p{Latin}]\p{M}*)+(?:['’\-‐‑](?:[\p{L}&&\p{Latin}]\p{M}*)+)*")
        .expect("token pattern is valid")
});

/// A word occurrence with its index among all tokens of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub position: usize,
}

/// Split `text` into canonical tokens, numbered from zero in occurrence order.
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_RE
        .find_iter(text)
        .enumerate()
        .map(|(position, m)| Token {
            word: canonicalize(m.as_str()),
            position,
        })
        .collect()
}

/// Bring a raw word into the canonical form used for comparison and output.
pub fn canonicalize(raw: &str) -> String {
    raw.nfc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '’' => '\'',
            '‐' | '‑' => '-',
            other => other,
        })
        .collect()
}

/// Word length in characters, the unit of the per-site length bounds.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}
