//! Per-site vocabulary policy and its resolution.
//!
//! Each news site gets a [`SiteConfig`]: extra stopwords on top of the
//! universal French list, plus length and frequency thresholds. The
//! [`SiteConfigResolver`] looks a site up by exact key and falls back to a
//! default policy for anything it does not know.
//!
//! # Override file
//!
//! Built-in entries can be replaced from a YAML file. Every entry must be
//! complete; an override replaces the built-in entry as a whole.
//!
//! ```yaml
//! default:
//!   additional_stopwords: []
//!   min_word_frequency: 1
//!   min_word_length: 3
//!   max_word_length: 25
//! sites:
//!   lemonde.fr:
//!     additional_stopwords: ["monde", "abonnés"]
//!     min_word_frequency: 2
//!     min_word_length: 4
//!     max_word_length: 20
//! ```

use crate::pipeline::tokenize::canonicalize;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors raised while building site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_word_frequency must be at least 1")]
    ZeroFrequency,
    #[error("min_word_length must be at least 1")]
    ZeroLength,
    #[error("max_word_length ({max}) is smaller than min_word_length ({min})")]
    InvertedLengthBounds { min: usize, max: usize },
    #[error("failed to read site config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse site config {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

const DEFAULT_MIN_WORD_FREQUENCY: usize = 1;
const DEFAULT_MIN_WORD_LENGTH: usize = 3;
const DEFAULT_MAX_WORD_LENGTH: usize = 25;

/// Stopword and threshold policy applied to one site's articles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SiteConfigEntry")]
pub struct SiteConfig {
    additional_stopwords: BTreeSet<String>,
    min_word_frequency: usize,
    min_word_length: usize,
    max_word_length: usize,
}

impl SiteConfig {
    /// Build a validated config. Stopwords are stored in canonical token form.
    pub fn new<I, S>(
        additional_stopwords: I,
        min_word_frequency: usize,
        min_word_length: usize,
        max_word_length: usize,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if min_word_frequency == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        if min_word_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if max_word_length < min_word_length {
            return Err(ConfigError::InvertedLengthBounds {
                min: min_word_length,
                max: max_word_length,
            });
        }
        let additional_stopwords = additional_stopwords
            .into_iter()
            .map(|w| canonicalize(w.as_ref().trim()))
            .filter(|w| !w.is_empty())
            .collect();
        Ok(Self {
            additional_stopwords,
            min_word_frequency,
            min_word_length,
            max_word_length,
        })
    }

    pub fn additional_stopwords(&self) -> &BTreeSet<String> {
        &self.additional_stopwords
    }

    pub fn min_word_frequency(&self) -> usize {
        self.min_word_frequency
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            additional_stopwords: BTreeSet::new(),
            min_word_frequency: DEFAULT_MIN_WORD_FREQUENCY,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

/// Serialized shape of a [`SiteConfig`]; every field is mandatory.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteConfigEntry {
    additional_stopwords: Vec<String>,
    min_word_frequency: usize,
    min_word_length: usize,
    max_word_length: usize,
}

impl TryFrom<SiteConfigEntry> for SiteConfig {
    type Error = ConfigError;

    fn try_from(entry: SiteConfigEntry) -> Result<Self, Self::Error> {
        SiteConfig::new(
            entry.additional_stopwords,
            entry.min_word_frequency,
            entry.min_word_length,
            entry.max_word_length,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideFile {
    #[serde(default)]
    default: Option<SiteConfig>,
    #[serde(default)]
    sites: BTreeMap<String, SiteConfig>,
}

struct BuiltinSite {
    site: &'static str,
    additional_stopwords: &'static [&'static str],
    min_word_frequency: usize,
    min_word_length: usize,
    max_word_length: usize,
}

/// Policies for the outlets scraped out of the box.
const BUILTIN_SITES: &[BuiltinSite] = &[
    BuiltinSite {
        site: "lemonde.fr",
        additional_stopwords: &["monde", "abonnés", "lire", "article", "réservé"],
        min_word_frequency: 2,
        min_word_length: 3,
        max_word_length: 25,
    },
    BuiltinSite {
        site: "lefigaro.fr",
        additional_stopwords: &["figaro", "abonné", "publié", "jour"],
        min_word_frequency: 2,
        min_word_length: 3,
        max_word_length: 25,
    },
    BuiltinSite {
        site: "liberation.fr",
        additional_stopwords: &["libération", "libé"],
        min_word_frequency: 1,
        min_word_length: 4,
        max_word_length: 25,
    },
    BuiltinSite {
        site: "francetvinfo.fr",
        additional_stopwords: &["franceinfo", "info", "vidéo", "direct"],
        min_word_frequency: 2,
        min_word_length: 3,
        max_word_length: 25,
    },
];

/// Resolves a site key to its [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct SiteConfigResolver {
    sites: HashMap<String, SiteConfig>,
    default: SiteConfig,
}

impl SiteConfigResolver {
    /// Resolver holding the built-in per-site table and the default policy.
    pub fn builtin() -> Self {
        let sites = BUILTIN_SITES
            .iter()
            .map(|b| {
                let config = SiteConfig {
                    additional_stopwords: b.additional_stopwords.iter().map(|w| canonicalize(w)).collect(),
                    min_word_frequency: b.min_word_frequency,
                    min_word_length: b.min_word_length,
                    max_word_length: b.max_word_length,
                };
                (b.site.to_string(), config)
            })
            .collect();
        Self {
            sites,
            default: SiteConfig::default(),
        }
    }

    /// Register (or replace) the policy for `site`.
    pub fn with_site(mut self, site: impl Into<String>, config: SiteConfig) -> Self {
        self.sites.insert(site.into(), config);
        self
    }

    /// Replace the fallback policy used for unknown sites.
    pub fn with_default(mut self, config: SiteConfig) -> Self {
        self.default = config;
        self
    }

    /// Policy for `site` by exact key match, else the default. Never fails.
    pub fn resolve(&self, site: &str) -> &SiteConfig {
        match self.sites.get(site) {
            Some(config) => config,
            None => {
                debug!(%site, "No site config registered; using default");
                &self.default
            }
        }
    }

    /// Whether `site` has its own entry.
    pub fn is_registered(&self, site: &str) -> bool {
        self.sites.contains_key(site)
    }

    /// Apply overrides from a YAML document. `origin` names the source in errors.
    pub fn apply_yaml(mut self, yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: OverrideFile = serde_yaml::from_str(yaml).map_err(|source| ConfigError::Yaml {
            path: origin.to_string(),
            source,
        })?;
        if let Some(default) = file.default {
            self = self.with_default(default);
        }
        let count = file.sites.len();
        for (site, config) in file.sites {
            self = self.with_site(site, config);
        }
        info!(origin, overridden_sites = count, "Applied site config overrides");
        Ok(self)
    }

    /// Apply overrides read from a YAML file.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn load_overrides(self, path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: origin.clone(),
            source,
        })?;
        self.apply_yaml(&yaml, &origin)
    }
}
