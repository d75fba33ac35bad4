//! # Docsim Normalization
//!
//! This crate turns raw document text into the deterministic symbol stream the
//! fingerprint engine hashes. The pipeline is surface-level on purpose: no
//! stemming, no morphological analysis, just casing, character class filtering
//! and stop-word removal.
//!
//! ## Pipeline
//!
//! Order matters and is fixed:
//!
//! 1. Optionally apply Unicode NFKC (off by default, see
//!    [`NormalizeConfig::normalize_unicode`]).
//! 2. Lowercase (Unicode-aware; a character may lowercase into several).
//! 3. Replace every character that is neither alphanumeric, `_`, nor
//!    whitespace with a single space.
//! 4. Split on whitespace into tokens.
//! 5. Drop tokens shorter than [`NormalizeConfig::min_token_chars`] characters
//!    or present in the configured [`StopWordSet`].
//! 6. Concatenate the survivors with **no separators**.
//!
//! Step 6 deliberately erases word boundaries: downstream gram windows may
//! straddle what were two different words, and inserting any delimiter would
//! change every fingerprint.
//!
//! ## Example
//!
//! ```
//! use docsim_canonical::{normalize, NormalizeConfig};
//!
//! let cfg = NormalizeConfig::default();
//! let stream = normalize("Привет, МИР! Это тестовый документ.", &cfg).unwrap();
//! assert_eq!(stream, "приветмирэтотестовыйдокумент");
//! ```

mod stopwords;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Configuration for normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization configuration.
    #[serde(default = "NormalizeConfig::default_version")]
    pub version: u32,
    /// If true, apply Unicode NFKC before any other transform. Off by default:
    /// the reference pipeline never folded compatibility forms, and enabling
    /// this changes fingerprints for inputs containing them.
    #[serde(default)]
    pub normalize_unicode: bool,
    /// Minimum length, in characters, for a token to survive filtering.
    #[serde(default = "NormalizeConfig::default_min_token_chars")]
    pub min_token_chars: usize,
    /// Function words removed before the stream is assembled.
    #[serde(default)]
    pub stop_words: StopWordSet,
}

impl NormalizeConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_min_token_chars() -> usize {
        2
    }

    /// Validate the configuration. Version 0 is reserved and invalid.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.version == 0 {
            return Err(NormalizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            min_token_chars: Self::default_min_token_chars(),
            stop_words: StopWordSet::default(),
        }
    }
}

/// Errors that can occur during normalization.
///
/// Degenerate input is not among them: text that normalizes to nothing yields
/// an empty stream, which downstream stages treat as a valid empty result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// An immutable set of words excluded from the symbol stream.
///
/// Injected into the pipeline through [`NormalizeConfig`]; the default is the
/// built-in Russian function-word list. There is no mutation API: build a new
/// set to change the vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StopWordSet(HashSet<String>);

impl StopWordSet {
    /// The built-in Russian stop-word list.
    pub fn builtin() -> Self {
        stopwords::RUSSIAN_STOP_WORDS.iter().copied().collect()
    }

    /// An empty set; every token passes the stop-word filter.
    pub fn empty() -> Self {
        Self(HashSet::new())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromIterator<String> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

/// Normalize raw text into the symbol stream consumed by the fingerprinter.
///
/// Returns the surviving tokens concatenated without separators. The result
/// may be empty; that is a valid degenerate value, not an error.
pub fn normalize(input: &str, cfg: &NormalizeConfig) -> Result<String, NormalizeError> {
    Ok(content_tokens(input, cfg)?.concat())
}

/// The tokens that survive filtering, in document order.
///
/// [`normalize`] is exactly the separator-free concatenation of this sequence;
/// the split form exists for diagnostics and reporting.
pub fn content_tokens(input: &str, cfg: &NormalizeConfig) -> Result<Vec<String>, NormalizeError> {
    cfg.validate()?;

    let scrubbed = if cfg.normalize_unicode {
        scrub(input.nfkc())
    } else {
        scrub(input.chars())
    };

    Ok(scrubbed
        .split_whitespace()
        .filter(|token| token.chars().count() >= cfg.min_token_chars)
        .filter(|token| !cfg.stop_words.contains(token))
        .map(str::to_string)
        .collect())
}

/// Lowercase and replace non-word characters with spaces in a single pass.
fn scrub<I>(iter: I) -> String
where
    I: Iterator<Item = char>,
{
    let mut out = String::new();
    for ch in iter {
        // Lowercasing can expand one character into several (e.g. İ -> i̇).
        for lower in ch.to_lowercase() {
            if is_word_char(lower) || lower.is_whitespace() {
                out.push(lower);
            } else {
                out.push(' ');
            }
        }
    }
    out
}

// Matches the `\w` class: Unicode alphanumerics plus underscore.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

// -----------------------------
// Unit tests
// -----------------------------
