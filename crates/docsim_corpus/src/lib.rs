//! Corpus layer: owns the mapping from document id to fingerprint.
//!
//! A [`Corpus`] is built for one analysis session with fixed normalization and
//! fingerprint configuration, filled incrementally by [`Corpus::ingest`] (or
//! in parallel by [`Corpus::ingest_batch`]), and cleared only by an explicit
//! [`Corpus::reset`]. Re-ingesting an id is allowed and intentional — last
//! write wins — so incremental corpora can refresh individual documents.
//!
//! Degenerate documents (nothing left after normalization, or a stream
//! shorter than the gram size) are stored as empty fingerprints and logged;
//! they never fail an ingest, and they score 0.0 against everything.

use std::collections::HashMap;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{info, warn, Level};

use docsim_canonical::{normalize, NormalizeConfig, NormalizeError};
use docsim_fingerprint::{fingerprint, Fingerprint, FingerprintConfig, FingerprintError};

/// Errors produced by the corpus layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// Document ids must be non-empty after trimming.
    #[error("document id must not be empty")]
    MissingDocId,
    /// Lookup of an id never ingested (or cleared by reset).
    #[error("document not found: {doc_id}")]
    NotFound { doc_id: String },
    #[error("normalization failed: {0}")]
    Normalize(#[from] NormalizeError),
    #[error("fingerprinting failed: {0}")]
    Fingerprint(#[from] FingerprintError),
}

/// In-memory map from document id to fingerprint for one analysis session.
#[derive(Debug, Clone)]
pub struct Corpus {
    normalize_cfg: NormalizeConfig,
    fingerprint_cfg: FingerprintConfig,
    entries: HashMap<String, Fingerprint>,
}

impl Corpus {
    /// Build an empty corpus. Both configurations are validated here, before
    /// any document is hashed.
    pub fn new(
        normalize_cfg: NormalizeConfig,
        fingerprint_cfg: FingerprintConfig,
    ) -> Result<Self, CorpusError> {
        normalize_cfg.validate()?;
        fingerprint_cfg.validate()?;
        Ok(Self {
            normalize_cfg,
            fingerprint_cfg,
            entries: HashMap::new(),
        })
    }

    pub fn normalize_config(&self) -> &NormalizeConfig {
        &self.normalize_cfg
    }

    pub fn fingerprint_config(&self) -> &FingerprintConfig {
        &self.fingerprint_cfg
    }

    /// Normalize and fingerprint one document, storing the result under
    /// `doc_id` and replacing any prior entry for that id.
    pub fn ingest(&mut self, doc_id: impl Into<String>, raw_text: &str) -> Result<(), CorpusError> {
        let doc_id = sanitize_doc_id(doc_id.into())?;

        let span = tracing::span!(Level::DEBUG, "docsim_corpus.ingest", doc_id = %doc_id);
        let _guard = span.enter();

        let fp = build_fingerprint(raw_text, &self.normalize_cfg, &self.fingerprint_cfg)?;
        if fp.is_empty() {
            warn!(
                doc_id = %doc_id,
                symbol_len = fp.meta.symbol_len,
                "no usable content after normalization; storing empty fingerprint"
            );
        } else {
            info!(doc_id = %doc_id, windows = fp.len(), "document fingerprinted");
        }

        self.entries.insert(doc_id, fp);
        Ok(())
    }

    /// Ingest a batch of `(doc_id, raw_text)` pairs, fingerprinting documents
    /// in parallel. Entries are stored in input order, so a duplicated id
    /// resolves to its last occurrence, exactly as with sequential
    /// [`Corpus::ingest`] calls. Returns the number of documents stored.
    pub fn ingest_batch<I>(&mut self, docs: I) -> Result<usize, CorpusError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let docs: Vec<(String, String)> = docs
            .into_iter()
            .map(|(id, text)| Ok((sanitize_doc_id(id)?, text)))
            .collect::<Result<_, CorpusError>>()?;

        let normalize_cfg = &self.normalize_cfg;
        let fingerprint_cfg = &self.fingerprint_cfg;
        let fingerprinted: Vec<(String, Fingerprint)> = docs
            .into_par_iter()
            .map(|(id, text)| {
                let fp = build_fingerprint(&text, normalize_cfg, fingerprint_cfg)?;
                Ok((id, fp))
            })
            .collect::<Result<_, CorpusError>>()?;

        let count = fingerprinted.len();
        for (doc_id, fp) in fingerprinted {
            if fp.is_empty() {
                warn!(
                    doc_id = %doc_id,
                    "no usable content after normalization; storing empty fingerprint"
                );
            }
            self.entries.insert(doc_id, fp);
        }
        info!(documents = count, total = self.entries.len(), "batch ingested");
        Ok(count)
    }

    /// Fingerprint lookup; fails with [`CorpusError::NotFound`] for unknown ids.
    pub fn get(&self, doc_id: &str) -> Result<&Fingerprint, CorpusError> {
        self.entries.get(doc_id).ok_or_else(|| CorpusError::NotFound {
            doc_id: doc_id.to_string(),
        })
    }

    pub fn contains(&self, doc_id: &str) -> bool {
        self.entries.contains_key(doc_id)
    }

    /// Ids of every ingested document, in no particular order.
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(id, fingerprint)` view over every entry, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Fingerprint)> {
        self.entries.iter().map(|(id, fp)| (id.as_str(), fp))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. The only way to clear a corpus; configuration is
    /// kept so the session can be rebuilt with the same parameters.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

impl Default for Corpus {
    fn default() -> Self {
        // Default configs are valid by construction.
        Self {
            normalize_cfg: NormalizeConfig::default(),
            fingerprint_cfg: FingerprintConfig::default(),
            entries: HashMap::new(),
        }
    }
}

fn build_fingerprint(
    raw_text: &str,
    normalize_cfg: &NormalizeConfig,
    fingerprint_cfg: &FingerprintConfig,
) -> Result<Fingerprint, CorpusError> {
    let stream = normalize(raw_text, normalize_cfg)?;
    Ok(fingerprint(&stream, fingerprint_cfg)?)
}

fn sanitize_doc_id(doc_id: String) -> Result<String, CorpusError> {
    let trimmed = doc_id.trim();
    if trimmed.is_empty() {
        return Err(CorpusError::MissingDocId);
    }
    Ok(trimmed.to_string())
}
