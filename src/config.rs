use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::engine::EngineConfig;
use crate::text::stopwords::StopwordSource;
use crate::topics::centrality::DEFAULT_TOPIC_LIMIT;
use crate::topics::frequency::DEFAULT_MAX_WORDS;
use crate::topics::tfidf::{TfIdfParams, DEFAULT_MAX_FEATURES, DEFAULT_NGRAM_RANGE};

/// Central configuration loaded from environment variables.
///
/// A .env file is loaded by the binary before this runs. Every setting has a
/// default, so an empty environment is a valid configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ngram_min: usize,
    pub ngram_max: usize,
    pub max_features: usize,
    pub topic_limit: usize,
    pub max_words: usize,
    pub stopwords: StopwordSource,
    /// Comma-separated override for the flagged-term lexicon
    pub flagged_terms: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ngram_min: DEFAULT_NGRAM_RANGE.0,
            ngram_max: DEFAULT_NGRAM_RANGE.1,
            max_features: DEFAULT_MAX_FEATURES,
            topic_limit: DEFAULT_TOPIC_LIMIT,
            max_words: DEFAULT_MAX_WORDS,
            stopwords: StopwordSource::Builtin,
            flagged_terms: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Lets tests supply
    /// values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let stopwords = match lookup("ANALYTICS_STOPWORDS").as_deref().map(str::trim) {
            None | Some("") | Some("builtin") => StopwordSource::Builtin,
            Some("extended") => StopwordSource::Extended,
            Some(other) => anyhow::bail!(
                "ANALYTICS_STOPWORDS must be \"builtin\" or \"extended\", got {other:?}"
            ),
        };

        let flagged_terms = lookup("ANALYTICS_FLAGGED_TERMS").map(|raw| {
            raw.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
        });

        let config = Self {
            ngram_min: parse_or(&lookup, "ANALYTICS_NGRAM_MIN", defaults.ngram_min)?,
            ngram_max: parse_or(&lookup, "ANALYTICS_NGRAM_MAX", defaults.ngram_max)?,
            max_features: parse_or(&lookup, "ANALYTICS_MAX_FEATURES", defaults.max_features)?,
            topic_limit: parse_or(&lookup, "ANALYTICS_TOPIC_LIMIT", defaults.topic_limit)?,
            max_words: parse_or(&lookup, "ANALYTICS_MAX_WORDS", defaults.max_words)?,
            stopwords,
            flagged_terms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject ranges the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        self.tfidf_params()
            .validate()
            .context("Invalid TF-IDF settings (check ANALYTICS_NGRAM_MIN/MAX and ANALYTICS_MAX_FEATURES)")?;
        if let Some(terms) = &self.flagged_terms {
            if terms.is_empty() {
                anyhow::bail!(
                    "ANALYTICS_FLAGGED_TERMS is set but lists no terms.\n\
                     Unset it to use the builtin lexicon."
                );
            }
        }
        Ok(())
    }

    pub fn tfidf_params(&self) -> TfIdfParams {
        TfIdfParams {
            ngram_range: (self.ngram_min, self.ngram_max),
            max_features: self.max_features,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            tfidf: self.tfidf_params(),
            stopwords: self.stopwords,
            flagged_terms: self.flagged_terms.clone(),
            topic_limit: self.topic_limit,
            max_words: self.max_words,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}")),
        _ => Ok(default),
    }
}
