//! Stopword and length filtering.
//!
//! The universal set is the Snowball French stopword list (the one shipped
//! with NLTK), stored in canonical token form. Site configs add their own
//! words on top of it.

use crate::config::SiteConfig;
use crate::pipeline::tokenize::{word_len, Token};
use once_cell::sync::Lazy;
use std::collections::HashSet;

const FRENCH_STOPWORD_LIST: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes", "moi",
    "mon", "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui",
    "sa", "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos",
    "votre", "vous", "c", "d", "j", "l", "à", "m", "n", "s", "t", "y", "été", "étée", "étées",
    "étés", "étant", "étante", "étants", "étantes", "suis", "es", "est", "sommes", "êtes",
    "sont", "serai", "seras", "sera", "serons", "serez", "seront", "serais", "serait",
    "serions", "seriez", "seraient", "étais", "était", "étions", "étiez", "étaient", "fus",
    "fut", "fûmes", "fûtes", "furent", "sois", "soit", "soyons", "soyez", "soient", "fusse",
    "fusses", "fût", "fussions", "fussiez", "fussent", "ayant", "ayante", "ayantes", "ayants",
    "eu", "eue", "eues", "eus", "ai", "as", "avons", "avez", "ont", "aurai", "auras", "aura",
    "aurons", "aurez", "auront", "aurais", "aurait", "aurions", "auriez", "auraient", "avais",
    "avait", "avions", "aviez", "avaient", "eut", "eûmes", "eûtes", "eurent", "aie", "aies",
    "ait", "ayons", "ayez", "aient", "eusse", "eusses", "eût", "eussions", "eussiez", "eussent",
];

static FRENCH_STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FRENCH_STOPWORD_LIST.iter().copied().collect());

/// Whether `word` (canonical form) belongs to the universal French stopword set.
pub fn is_universal_stopword(word: &str) -> bool {
    FRENCH_STOPWORDS.contains(word)
}

/// Filter applying one site's stopword and length policy.
#[derive(Debug, Clone, Copy)]
pub struct StopwordFilter<'a> {
    config: &'a SiteConfig,
}

impl<'a> StopwordFilter<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Universal or site-specific stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        is_universal_stopword(word) || self.config.additional_stopwords().contains(word)
    }

    /// Whether `word` survives the filter.
    pub fn accepts(&self, word: &str) -> bool {
        let len = word_len(word);
        len >= self.config.min_word_length()
            && len <= self.config.max_word_length()
            && !self.is_stopword(word)
    }

    /// Keep the accepted tokens, positions untouched.
    pub fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter().filter(|t| self.accepts(&t.word)).collect()
    }
}
